//! Error types for gitcfg-discovery

use std::path::PathBuf;

/// Result type for gitcfg-discovery operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while locating a repository or its config files
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not a git repository (or any of the parent directories): {start}")]
    NotInGitDir { start: PathBuf },

    #[error("Corrupt git dir: {path}")]
    CorruptGitDir { path: PathBuf },

    #[error("gitdir file '{file}' points to corrupt git repo: {target}")]
    CorruptGitDirTarget { file: PathBuf, target: PathBuf },

    #[error("Bad gitdir file '{path}'")]
    BadGitDirFile { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Fs(#[from] gitcfg_fs::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
