//! Settings persistence - a schema-free key/value store on disk.
//!
//! Settings are written whenever a value changes and read on demand.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{HostError, Result};

/// File name of the store inside the config directory.
const SETTINGS_FILE: &str = "settings.json";

/// Key/value settings store backed by a single JSON object on disk.
///
/// Values round-trip as [`serde_json::Value`], so the store itself
/// carries no schema and last write wins per key. A missing file reads
/// as an empty store; a file that no longer parses also reads as empty
/// (with a warning) rather than taking the host down. Writes go through
/// a temp file and rename to prevent data corruption on crash or power
/// loss.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Open the store at its default platform location.
    pub fn open_default() -> Self {
        let path = directories::ProjectDirs::from("com", "TermMasterStudio", "TMS")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE));
        Self { path }
    }

    /// Open a store backed by a specific file.
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value);
        self.write_entries(&entries)
    }

    /// Fetch the value stored under `key`; `None` when absent.
    pub fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.read_entries()?.get(key).cloned())
    }

    /// Remove the backing file. A store that never existed is already
    /// clear, so a missing file is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(HostError::SettingsSave {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    fn read_entries(&self) -> Result<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(HostError::SettingsLoad {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };
        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "settings store is not valid JSON, reading it as empty"
                );
                Ok(Map::new())
            }
        }
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<()> {
        // Ensure the config directory exists
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| HostError::SettingsSave {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let content =
            serde_json::to_string_pretty(entries).map_err(|e| HostError::SettingsSave {
                path: self.path.clone(),
                source: std::io::Error::other(format!("settings serialization failed: {e}")),
            })?;

        // Write to a temp file first, then rename for atomicity
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content).map_err(|e| HostError::SettingsSave {
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, &self.path).map_err(|e| HostError::SettingsSave {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(())
    }
}
