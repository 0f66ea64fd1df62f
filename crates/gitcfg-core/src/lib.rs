//! Layered resolution of git configuration
//!
//! Ties the lower crates together: discovery finds the system, global and
//! repository-local config files, the parser reads each of them (following
//! `include.path` directives), and the store merges them with their scope so
//! that later layers win.
//!
//! ```text
//!                  gitcfg-cli
//!                      |
//!                 gitcfg-core
//!                      |
//!     +----------------+----------------+
//!     |                |                |
//! gitcfg-fs    gitcfg-discovery    gitcfg-store
//! ```
//!
//! # Example
//!
//! ```no_run
//! use gitcfg_core::ConfigResolver;
//!
//! let resolved = ConfigResolver::new(".").resolve()?;
//! println!("editor: {}", resolved.store.get("core.editor"));
//! # Ok::<(), gitcfg_core::Error>(())
//! ```

pub mod error;
pub mod resolver;

pub use error::{Error, Result};
pub use resolver::{ConfigResolver, LoadedSource, MAX_INCLUDE_DEPTH, ResolvedConfig};

pub use gitcfg_discovery::ConfigLocations;
pub use gitcfg_store::{ConfigStore, ConfigValue, Scope};
