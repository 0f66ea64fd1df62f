//! Configuration resolution with layered merge
//!
//! The `ConfigResolver` loads the system, global and repository-local config
//! files in that order and merges them into one scope-tagged store, with
//! later layers overriding earlier ones for scalar reads.

use std::fs;
use std::path::{Path, PathBuf};

use gitcfg_discovery::ConfigLocations;
use gitcfg_fs::{Environment, ProcessEnv, absolute, absolute_join, vars};
use gitcfg_store::{ConfigStore, ConfigValue, Parsed, Scope, parse, parse_bool};
use serde::Serialize;

use crate::{Error, Result};

/// Deepest `include.path` nesting followed before giving up.
pub const MAX_INCLUDE_DEPTH: usize = 10;

const INCLUDE_SECTION: &str = "include";
const INCLUDE_PATH: &str = "path";

/// A config file that was read during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedSource {
    /// Layer scope, with [`Scope::INCLUDE`] for files reached via `include.path`
    pub scope: Scope,
    pub path: PathBuf,
    /// Line count reported by the parser
    pub lines: usize,
}

/// The effective configuration after merging all layers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Every value from every layer, tagged with its scope
    pub store: ConfigStore,

    /// Files read, in load order
    pub sources: Vec<LoadedSource>,

    /// Control directory of the enclosing repository, if any
    pub git_dir: Option<PathBuf>,
}

/// Resolves configuration by merging the standard git layers
///
/// Configuration is loaded from:
/// 1. System config (`$GIT_CONFIG_SYSTEM` or `/etc/gitconfig`)
/// 2. Global config (`$GIT_CONFIG_GLOBAL`, XDG `git/config` or `~/.gitconfig`)
/// 3. Local config (`<git dir>/config`)
///
/// Environment variables and the working directory are read through an
/// injected [`Environment`], the process environment by default.
#[derive(Debug, Clone)]
pub struct ConfigResolver<E = ProcessEnv> {
    start_dir: PathBuf,
    env: E,
    skip_system: bool,
}

impl ConfigResolver<ProcessEnv> {
    /// Create a resolver for the repository containing `start_dir`, reading
    /// the process environment.
    pub fn new(start_dir: impl Into<PathBuf>) -> Self {
        Self::with_env(start_dir, ProcessEnv)
    }
}

impl<E: Environment> ConfigResolver<E> {
    /// Create a resolver that reads variables and the working directory
    /// from `env`.
    pub fn with_env(start_dir: impl Into<PathBuf>, env: E) -> Self {
        Self {
            start_dir: start_dir.into(),
            env,
            skip_system: false,
        }
    }

    /// Skip the system layer, as `GIT_CONFIG_NOSYSTEM` does.
    pub fn without_system(mut self) -> Self {
        self.skip_system = true;
        self
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Where each layer's config file lives for this start directory.
    pub fn locations(&self) -> Result<ConfigLocations> {
        Ok(ConfigLocations::discover(&self.env, &self.start_dir)?)
    }

    fn system_disabled(&self) -> bool {
        self.skip_system
            || self
                .env
                .non_empty_var(vars::GIT_CONFIG_NOSYSTEM)
                .and_then(|value| parse_bool(&value))
                .unwrap_or(false)
    }

    /// Resolve the effective configuration.
    ///
    /// Missing layers are skipped. A file that exists but cannot be read or
    /// parsed fails the whole resolution, as does a corrupt repository.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gitcfg_core::ConfigResolver;
    ///
    /// let resolved = ConfigResolver::new("/path/to/repo").without_system().resolve()?;
    /// let bare = resolved.store.get_bool("core.bare", false)?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let locations = self.locations()?;
        let mut resolved = ResolvedConfig {
            git_dir: locations.git_dir.clone(),
            ..Default::default()
        };

        // Layer 1 - System config
        if self.system_disabled() {
            tracing::debug!("System config disabled (layer 1) - skipping");
        } else {
            self.load_layer(&mut resolved, Scope::SYSTEM, &locations.system)?;
        }

        // Layer 2 - Global config
        match &locations.global {
            Some(path) => self.load_layer(&mut resolved, Scope::GLOBAL, path)?,
            None => tracing::debug!("No home directory (layer 2) - skipping"),
        }

        // Layer 3 - Repository config
        match &locations.local {
            Some(path) => self.load_layer(&mut resolved, Scope::LOCAL, path)?,
            None => tracing::debug!("Not inside a repository (layer 3) - skipping"),
        }

        tracing::debug!(
            keys = resolved.store.len(),
            sources = resolved.sources.len(),
            "Resolved configuration"
        );
        Ok(resolved)
    }

    fn load_layer(&self, resolved: &mut ResolvedConfig, scope: Scope, path: &Path) -> Result<()> {
        let path = absolute(&self.env, path)?;
        if !path.is_file() {
            tracing::debug!(path = %path.display(), %scope, "No config found - skipping");
            return Ok(());
        }

        tracing::debug!(path = %path.display(), %scope, "Loading config");
        let store = self.load_file(&path, scope, 0, &mut resolved.sources)?;
        resolved.store.merge(&store, scope);
        Ok(())
    }

    /// Parse `path` and fold its includes into the returned store.
    ///
    /// Values of the file itself are untagged; values pulled in through
    /// `include.path` carry [`Scope::INCLUDE`]. An included file is spliced
    /// in where its directive appears, so later values in the including file
    /// still win over it.
    fn load_file(
        &self,
        path: &Path,
        scope: Scope,
        depth: usize,
        sources: &mut Vec<LoadedSource>,
    ) -> Result<ConfigStore> {
        let bytes = fs::read(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let Parsed { entries, lines, .. } = parse(&bytes, &path.to_string_lossy())?;

        sources.push(LoadedSource {
            scope: if depth == 0 { scope } else { scope | Scope::INCLUDE },
            path: path.to_path_buf(),
            lines,
        });

        let mut store = ConfigStore::new();
        for entry in entries {
            let include = entry
                .is(INCLUDE_SECTION, INCLUDE_PATH)
                .then(|| entry.value.clone());
            store.insert(
                entry.section,
                entry.key,
                ConfigValue::new(Scope::NONE, entry.value),
            );

            let Some(include) = include else { continue };
            if let Some(included) = self.load_include(path, &include, scope, depth, sources)? {
                store.merge(&included, Scope::INCLUDE);
            }
        }

        Ok(store)
    }

    /// Load the target of one `include.path` directive found in `from`.
    ///
    /// A missing target yields `None`. The depth limit applies only to
    /// targets that exist.
    fn load_include(
        &self,
        from: &Path,
        include: &str,
        scope: Scope,
        depth: usize,
        sources: &mut Vec<LoadedSource>,
    ) -> Result<Option<ConfigStore>> {
        let base = from.parent().unwrap_or(from);
        let target = absolute_join(&self.env, base, include)?;
        if !target.is_file() {
            tracing::debug!(
                from = %from.display(),
                include = %target.display(),
                "Include target not found - skipping"
            );
            return Ok(None);
        }

        if depth >= MAX_INCLUDE_DEPTH {
            return Err(Error::IncludeDepthExceeded {
                path: from.to_path_buf(),
                max: MAX_INCLUDE_DEPTH,
            });
        }

        tracing::debug!(from = %from.display(), include = %target.display(), depth, "Loading include");
        self.load_file(&target, scope, depth + 1, sources).map(Some)
    }
}
