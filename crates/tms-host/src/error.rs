//! Host error types.
//!
//! Host operations return structured errors carrying the full platform
//! diagnostics; the UI boundary shows [`user_message`](HostError::user_message)
//! instead, so platform detail reaches the logs but never the user.

use std::path::PathBuf;
use thiserror::Error;

/// Host capability error.
#[derive(Debug, Error)]
pub enum HostError {
    /// Path does not exist. Raised by the pre-checks on both loads and
    /// saves, since saves only ever overwrite an existing file.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Clipboard handle could not be opened or written.
    #[error("clipboard write failed: {message}")]
    Clipboard { message: String },

    /// Settings store could not be read.
    #[error("failed to read settings store {path}: {source}")]
    SettingsLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings store could not be written.
    #[error("failed to write settings store {path}: {source}")]
    SettingsSave {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HostError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("The file at {} does not exist", path.display())
            }
            Self::FileRead { path, .. } => {
                format!("Could not read the file at {}", path.display())
            }
            Self::FileWrite { path, .. } => {
                format!("Could not save the file at {}", path.display())
            }
            Self::Clipboard { .. } => "Could not write to the clipboard".to_string(),
            Self::SettingsLoad { .. } | Self::SettingsSave { .. } => {
                "Could not access the stored settings".to_string()
            }
        }
    }
}

/// Result type for host operations.
pub type Result<T> = std::result::Result<T, HostError>;
