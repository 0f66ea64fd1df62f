//! Error types for gitcfg-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from gitcfg-core
    #[error(transparent)]
    Core(#[from] gitcfg_core::Error),

    /// Typed read error from gitcfg-store
    #[error(transparent)]
    Store(#[from] gitcfg_store::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The requested key has no value. Reported through the exit code only.
    #[error("Key not found: {key}")]
    KeyNotFound { key: String },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Whether the error should be reported without a message, as git does
    /// for a missing key.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }
}
