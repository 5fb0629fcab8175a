//! The capability contract between the editor API and its host.

use std::path::Path;

use serde_json::Value;

use crate::error::Result;

/// Capabilities the host platform provides to the editor.
///
/// One implementor per runtime: [`DesktopHost`](crate::DesktopHost)
/// talks to the real platform, [`MemoryHost`](crate::MemoryHost) keeps
/// everything in process memory. Callers receive the capability by
/// injection rather than reaching for a process global, which keeps
/// every layer above testable without a desktop session.
pub trait HostBridge: Send + Sync {
    /// Read the whole file at `path` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// [`HostError::FileNotFound`](crate::HostError::FileNotFound) when
    /// the path does not exist,
    /// [`HostError::FileRead`](crate::HostError::FileRead) when the read
    /// fails. Partial content is never returned.
    fn load_file(&self, path: &Path) -> Result<String>;

    /// Overwrite the file at `path` with `data`.
    ///
    /// The target must already exist: master files are created by other
    /// tools and this editor only rewrites them in place.
    ///
    /// # Errors
    ///
    /// [`HostError::FileNotFound`](crate::HostError::FileNotFound) when
    /// the path does not exist,
    /// [`HostError::FileWrite`](crate::HostError::FileWrite) when the
    /// write fails.
    fn save_file(&self, path: &Path, data: &str) -> Result<()>;

    /// Replace the system clipboard text with `text`.
    fn write_clipboard(&self, text: &str) -> Result<()>;

    /// Store `value` under `key`, replacing any previous value.
    fn save_setting(&self, key: &str, value: Value) -> Result<()>;

    /// Fetch the value stored under `key`.
    ///
    /// `Ok(None)` means the key is absent, which is distinct from a
    /// store that could not be read at all.
    fn load_setting(&self, key: &str) -> Result<Option<Value>>;

    /// Drop every stored setting.
    fn clear_settings(&self) -> Result<()>;
}
