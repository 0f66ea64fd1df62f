//! Error types for gitcfg-store

/// Result type for gitcfg-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur reading typed values or parsing configuration text
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Value '{value}' of '{key}' is not a boolean value")]
    NotBoolValue { key: String, value: String },

    #[error("Value '{value}' of '{key}' is not a valid integer: {source}")]
    InvalidInteger {
        key: String,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Syntax error in '{file}' at line {line}: {kind}")]
    Syntax {
        file: String,
        line: usize,
        kind: SyntaxErrorKind,
    },
}

impl Error {
    /// Line number of a syntax error.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Syntax { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// What went wrong while parsing configuration text
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxErrorKind {
    #[error("invalid character in variable name")]
    InvalidKeyChar,

    #[error("invalid section header")]
    InvalidSectionName,

    #[error("variable defined outside of any section")]
    MissingSection,

    #[error("unterminated quote")]
    UnterminatedQuote,

    #[error("invalid escape sequence")]
    InvalidEscape,

    #[error("input is not valid UTF-8")]
    InvalidUtf8,
}
