//! API error types.

use thiserror::Error;
use tms_codec::ParseError;
use tms_host::HostError;

/// Errors surfaced by [`TermsApi`](crate::TermsApi) operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Loaded text could not be decoded as master terms.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A host capability failed.
    #[error(transparent)]
    Host(#[from] HostError),

    /// A settings value could not be converted to or from JSON.
    #[error("settings value conversion failed: {message}")]
    SettingsCodec { message: String },

    /// A background task did not run to completion.
    #[error("background task failed: {message}")]
    TaskFailed { message: String },
}

impl ApiError {
    /// Get a user-friendly message for this error.
    ///
    /// Callers show this string, keep whatever state they already had
    /// and move on; the precise cause only reaches the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::Parse(_) => "The file does not contain master-terms data".to_string(),
            Self::Host(e) => e.user_message(),
            Self::SettingsCodec { .. } => "Could not access the stored settings".to_string(),
            Self::TaskFailed { .. } => "The operation could not be completed".to_string(),
        }
    }
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
