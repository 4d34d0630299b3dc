//! Error types for word generation and dictionary loading.
//!
//! Each variant carries a short code for boundary layers:
//!
//! - V001: `InvalidCharacters` (empty input or a character outside a-z/A-Z)
//! - V002: `TooLong` (input longer than the configured maximum)
//! - G001: `Internal` (unexpected failure during generation)
//! - D001: `Io` (dictionary file could not be read)
//! - D002: `Empty` (dictionary holds no usable words)

use std::io;
use std::path::PathBuf;

/// Rejected input. Always recoverable by supplying corrected input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Input is invalid. Only alphabets are allowed.")]
    InvalidCharacters,

    #[error("Input is too long. Max input length is {max}.")]
    TooLong { length: usize, max: usize },
}

impl ValidationError {
    pub const fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidCharacters => "V001",
            ValidationError::TooLong { .. } => "V002",
        }
    }

    pub const fn help(&self) -> &'static str {
        match self {
            ValidationError::InvalidCharacters => "Use only the letters A-Z (upper or lower case).",
            ValidationError::TooLong { .. } => "Remove some letters and try again.",
        }
    }
}

/// Failure of the word generation operation as a whole.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Details are logged, never surfaced.
    #[error("Internal server error while generating words")]
    Internal,
}

impl GenerateError {
    pub const fn code(&self) -> &'static str {
        match self {
            GenerateError::Validation(e) => e.code(),
            GenerateError::Internal => "G001",
        }
    }

    /// Status category a request/response boundary reports for this error.
    pub const fn status_code(&self) -> u16 {
        match self {
            GenerateError::Validation(_) => 400,
            GenerateError::Internal => 500,
        }
    }

    pub const fn is_validation(&self) -> bool {
        matches!(self, GenerateError::Validation(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dictionary contains no usable words")]
    Empty,
}

impl DictionaryError {
    pub const fn code(&self) -> &'static str {
        match self {
            DictionaryError::Io { .. } => "D001",
            DictionaryError::Empty => "D002",
        }
    }
}
