//! Error types for gitcfg-core

use std::path::PathBuf;

/// Result type for gitcfg-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving the effective configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A config file exists but could not be read
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `include.path` chains nest deeper than the supported limit
    #[error("Include depth of {max} exceeded while reading {path}")]
    IncludeDepthExceeded { path: PathBuf, max: usize },

    // Transparent wrappers for underlying crate errors
    /// Parse or typed-read error from gitcfg-store
    #[error(transparent)]
    Store(#[from] gitcfg_store::Error),

    /// Repository discovery error from gitcfg-discovery
    #[error(transparent)]
    Discovery(#[from] gitcfg_discovery::Error),

    /// Path resolution error from gitcfg-fs
    #[error(transparent)]
    Fs(#[from] gitcfg_fs::Error),
}
