//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading a dataset
///
/// Every fetch or parse failure is reported as `DataUnavailable`; the
/// session cannot continue without data.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Dataset unavailable from {source_id}: {reason}")]
    DataUnavailable { source_id: String, reason: String },
}

impl LoadError {
    pub fn unavailable(source_id: impl Into<String>, reason: impl ToString) -> Self {
        LoadError::DataUnavailable {
            source_id: source_id.into(),
            reason: reason.to_string(),
        }
    }
}

/// Errors raised while parsing a string-encoded skill list
///
/// These never leave the normalizer: a malformed cell becomes an empty list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkillFieldError {
    #[error("Expected '{expected}' at offset {offset}")]
    Expected { expected: char, offset: usize },

    #[error("Unexpected character '{found}' at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },

    #[error("Unterminated string starting at offset {0}")]
    UnterminatedString(usize),

    #[error("Unexpected end of input")]
    UnexpectedEnd,

    #[error("Trailing characters after list at offset {0}")]
    TrailingInput(usize),

    #[error("Invalid escape sequence at offset {0}")]
    InvalidEscape(usize),
}

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("No data to chart")]
    EmptyData,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
