//! Repository and configuration file discovery
//!
//! Locates a repository's control directory by walking up from a starting
//! directory, follows `gitdir:` redirect files used by submodules and
//! worktrees, and computes where the system, global and local
//! configuration files live.

pub mod constants;
pub mod error;
pub mod gitdir;
pub mod locations;

pub use constants::GitPath;
pub use error::{Error, Result};
pub use gitdir::{find_git_config, find_git_dir, is_git_dir};
pub use locations::{ConfigLocations, global_config_file, system_config_file};
