//! Commands that report where configuration comes from

use std::path::Path;

use colored::Colorize;
use gitcfg_core::{ConfigLocations, ConfigResolver, LoadedSource};
use gitcfg_fs::Environment;

use crate::error::Result;

/// Run the locate command
pub fn run_locate<E: Environment>(resolver: &ConfigResolver<E>, json: bool) -> Result<()> {
    let locations = resolver.locations()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&locations)?);
        return Ok(());
    }

    for (label, path) in location_rows(&locations) {
        let rendered = match path {
            Some(path) if path.exists() => path.display().to_string(),
            Some(path) => format!("{} {}", path.display(), "(missing)".dimmed()),
            None => "(none)".dimmed().to_string(),
        };
        println!("{:<8} {}", label.bold(), rendered);
    }
    Ok(())
}

/// Run the sources command
pub fn run_sources<E: Environment>(resolver: &ConfigResolver<E>) -> Result<()> {
    let resolved = resolver.resolve()?;

    if resolved.sources.is_empty() {
        println!("{}", "No config files found.".dimmed());
        return Ok(());
    }

    for source in &resolved.sources {
        println!("{}", source_line(source));
    }
    Ok(())
}

pub(crate) fn location_rows(locations: &ConfigLocations) -> [(&'static str, Option<&Path>); 4] {
    [
        ("git-dir", locations.git_dir.as_deref()),
        ("system", Some(locations.system.as_path())),
        ("global", locations.global.as_deref()),
        ("local", locations.local.as_deref()),
    ]
}

pub(crate) fn source_line(source: &LoadedSource) -> String {
    format!(
        "{}\t{}\t{} lines",
        source.scope,
        source.path.display(),
        source.lines
    )
}
