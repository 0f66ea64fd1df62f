//! gitcfg CLI
//!
//! Reads the effective git configuration of a repository the way git
//! layers it: system, then global, then repository-local.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use gitcfg_core::ConfigResolver;
use gitcfg_fs::ProcessEnv;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        if !e.is_silent() {
            eprintln!("{}: {}", "error".red().bold(), e);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    let Some(command) = cli.command else {
        println!("{} Inspect git configuration", "gitcfg".green().bold());
        println!();
        println!("Run {} for available commands.", "gitcfg --help".cyan());
        return Ok(());
    };

    let start = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let mut resolver = ConfigResolver::new(start);
    if cli.no_system {
        resolver = resolver.without_system();
    }

    execute_command(command, &resolver)
}

fn execute_command(cmd: Commands, resolver: &ConfigResolver<ProcessEnv>) -> Result<()> {
    match cmd {
        Commands::Get { key, value_type } => commands::run_get(resolver, &key, value_type),
        Commands::GetAll { key, show_scope } => commands::run_get_all(resolver, &key, show_scope),
        Commands::List {
            show_scope,
            json,
            filter,
        } => commands::run_list(resolver, show_scope, json, filter.scope()),
        Commands::Locate { json } => commands::run_locate(resolver, json),
        Commands::Sources => commands::run_sources(resolver),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitcfg_fs::MapEnv;
    use gitcfg_test_utils::repo::TestRepo;

    fn resolver(repo: &TestRepo) -> ConfigResolver<MapEnv> {
        ConfigResolver::with_env(repo.work(), repo.env())
    }

    #[test]
    fn test_commands_run_in_temp_repo() {
        let repo = TestRepo::new();
        repo.init_git();
        repo.write_global_config("[user]\n\tname = Jane\n");
        let resolver = resolver(&repo);

        assert!(commands::run_get(&resolver, "user.name", None).is_ok());
        assert!(commands::run_get_all(&resolver, "user.name", true).is_ok());
        assert!(commands::run_list(&resolver, true, false, gitcfg_core::Scope::ALL).is_ok());
        assert!(commands::run_list(&resolver, false, true, gitcfg_core::Scope::LOCAL).is_ok());
        assert!(commands::run_locate(&resolver, false).is_ok());
        assert!(commands::run_locate(&resolver, true).is_ok());
        assert!(commands::run_sources(&resolver).is_ok());
    }

    #[test]
    fn test_get_missing_key_is_silent() {
        let repo = TestRepo::new();
        repo.init_git();

        let err = commands::run_get(&resolver(&repo), "user.name", None).unwrap_err();
        assert!(err.is_silent());
    }

    #[test]
    fn test_parse_error_surfaces() {
        let repo = TestRepo::new();
        repo.init_git();
        repo.write_local_config("[core\n");

        let err = commands::run_list(&resolver(&repo), false, false, gitcfg_core::Scope::ALL)
            .unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
        assert!(!err.is_silent());
    }
}
