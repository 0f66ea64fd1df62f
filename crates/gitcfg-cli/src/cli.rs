//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use gitcfg_core::Scope;

/// gitcfg - Inspect the effective git configuration of a repository
#[derive(Parser, Debug)]
#[command(name = "gitcfg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if started in <DIR>
    #[arg(short = 'C', global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Ignore the system-wide config file
    #[arg(long, global = true)]
    pub no_system: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the effective value of a key
    ///
    /// Exits with status 1 and prints nothing when the key is not set.
    ///
    /// Examples:
    ///   gitcfg get user.name
    ///   gitcfg get core.bare --type bool
    Get {
        /// Key in `section.name` or `section.subsection.name` form
        key: String,

        /// Interpret the value as the given type
        #[arg(long = "type", value_enum)]
        value_type: Option<ValueType>,
    },

    /// Print every value of a key, lowest precedence first
    GetAll {
        /// Key in `section.name` or `section.subsection.name` form
        key: String,

        /// Prefix each value with the scope it came from
        #[arg(long)]
        show_scope: bool,
    },

    /// List every key and value
    List {
        /// Prefix each entry with the scope it came from
        #[arg(long)]
        show_scope: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        filter: ScopeFilter,
    },

    /// Show where the repository and each config file live
    Locate {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the config files that were read, including includes
    Sources,
}

/// Restrict output to a single layer
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
#[group(multiple = false)]
pub struct ScopeFilter {
    /// Only values from the system config
    #[arg(long)]
    pub system: bool,

    /// Only values from the global config
    #[arg(long)]
    pub global: bool,

    /// Only values from the repository config
    #[arg(long)]
    pub local: bool,
}

impl ScopeFilter {
    /// The selected scope, or [`Scope::ALL`] when no flag was given.
    pub fn scope(&self) -> Scope {
        if self.system {
            Scope::SYSTEM
        } else if self.global {
            Scope::GLOBAL
        } else if self.local {
            Scope::LOCAL
        } else {
            Scope::ALL
        }
    }
}

/// Value types understood by `get --type`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Bool,
    Int,
}
