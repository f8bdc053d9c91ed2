//! Error types for the sifter crate.

use thiserror::Error;

/// Errors that can occur when building predicates or reading records and values.
#[derive(Debug, Error)]
pub enum SifterError {
    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// Index is past the end of the record sequence.
    #[error("index {index} out of range for {len} records")]
    IndexOutOfRange { index: usize, len: usize },

    /// Typed read of a tagged value found a different variant.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// `next` was called on a cursor with no remaining values.
    #[error("cursor exhausted")]
    Exhausted,
}

/// Result type for sifter operations.
pub type Result<T> = std::result::Result<T, SifterError>;
