//! In-memory implementation of the host capabilities.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::{Map, Value};

use crate::bridge::HostBridge;
use crate::error::{HostError, Result};

/// Host capabilities kept entirely in process memory.
///
/// Follows the [`DesktopHost`](crate::DesktopHost) contract exactly,
/// including the overwrite-only save pre-check, so code exercised
/// against this host behaves the same on the desktop build.
#[derive(Debug, Default)]
pub struct MemoryHost {
    files: Mutex<HashMap<PathBuf, String>>,
    clipboard: Mutex<String>,
    settings: Mutex<Map<String, Value>>,
}

// A poisoned guard still holds valid data for these plain maps.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating it or replacing its contents.
    pub fn insert_file(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        lock(&self.files).insert(path.into(), contents.into());
    }

    /// Current contents of a file, `None` when it was never seeded.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        lock(&self.files).get(path.as_ref()).cloned()
    }

    /// Text most recently written to the clipboard.
    pub fn clipboard_text(&self) -> String {
        lock(&self.clipboard).clone()
    }
}

impl HostBridge for MemoryHost {
    fn load_file(&self, path: &Path) -> Result<String> {
        lock(&self.files)
            .get(path)
            .cloned()
            .ok_or_else(|| HostError::FileNotFound {
                path: path.to_path_buf(),
            })
    }

    fn save_file(&self, path: &Path, data: &str) -> Result<()> {
        let mut files = lock(&self.files);
        match files.get_mut(path) {
            Some(contents) => {
                *contents = data.to_string();
                Ok(())
            }
            None => Err(HostError::FileNotFound {
                path: path.to_path_buf(),
            }),
        }
    }

    fn write_clipboard(&self, text: &str) -> Result<()> {
        *lock(&self.clipboard) = text.to_string();
        Ok(())
    }

    fn save_setting(&self, key: &str, value: Value) -> Result<()> {
        lock(&self.settings).insert(key.to_string(), value);
        Ok(())
    }

    fn load_setting(&self, key: &str) -> Result<Option<Value>> {
        Ok(lock(&self.settings).get(key).cloned())
    }

    fn clear_settings(&self) -> Result<()> {
        lock(&self.settings).clear();
        Ok(())
    }
}
