//! Error types for master-terms decoding.

use thiserror::Error;

/// Errors that can occur while decoding master-terms text.
///
/// Decoding refuses to start on unusable input so callers can tell "not
/// master-terms data" apart from an empty result and keep whatever rows
/// they already had.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Input text is empty.
    #[error("master terms input is empty")]
    EmptyInput,

    /// Input carries no comma-delimited content: either no comma at all,
    /// or a comma before any field data.
    #[error("master terms input is not comma-delimited")]
    NotDelimited,
}

/// Result type for decoding operations.
pub type Result<T> = std::result::Result<T, ParseError>;
