//! Error types for gitcfg-fs

/// Result type for gitcfg-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving environment-derived paths
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot find home directory")]
    HomeNotFound,

    #[error("Cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}
