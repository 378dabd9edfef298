//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or scoring.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The submitted text is empty.
    #[error("text is required")]
    EmptyText,

    /// The submitted text is too short to analyze.
    #[error("text too short to analyze: {length} chars")]
    TextTooShort {
        /// Trimmed length of the rejected text.
        length: usize,
    },

    /// The submitted text has too few words to analyze.
    #[error("too few words to analyze: {words}")]
    TooFewWords {
        /// Word count of the rejected text.
        words: usize,
    },

    /// A verdict label could not be parsed.
    #[error("unknown verdict label: {0}")]
    UnknownVerdict(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
