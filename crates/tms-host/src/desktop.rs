//! Desktop implementation of the host capabilities.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use serde_json::Value;
use tracing::{debug, warn};

use crate::bridge::HostBridge;
use crate::error::{HostError, Result};
use crate::settings::SettingsStore;

/// Host capabilities wired to the real platform: `std::fs` for files,
/// `arboard` for the clipboard and a [`SettingsStore`] for settings.
pub struct DesktopHost {
    /// Created lazily on the first copy and kept for the host lifetime.
    /// On X11 the clipboard owner must stay alive to respond to paste
    /// requests from other applications.
    clipboard: Mutex<Option<arboard::Clipboard>>,
    settings: SettingsStore,
}

impl DesktopHost {
    /// Create a host with the settings store at its default location.
    pub fn new() -> Self {
        Self::with_settings(SettingsStore::open_default())
    }

    /// Create a host backed by a specific settings store.
    pub fn with_settings(settings: SettingsStore) -> Self {
        Self {
            clipboard: Mutex::new(None),
            settings,
        }
    }

    /// The backing settings store.
    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }
}

impl Default for DesktopHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostBridge for DesktopHost {
    fn load_file(&self, path: &Path) -> Result<String> {
        if let Err(e) = fs::metadata(path) {
            warn!(path = %path.display(), error = %e, "load requested for a missing file");
            return Err(HostError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        match fs::read_to_string(path) {
            Ok(data) => {
                debug!(path = %path.display(), bytes = data.len(), "loaded file");
                Ok(data)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read file");
                Err(HostError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        }
    }

    fn save_file(&self, path: &Path, data: &str) -> Result<()> {
        // Overwrite only: master files are created by other tools, so a
        // save to a path that does not exist is a caller mistake.
        if let Err(e) = fs::metadata(path) {
            warn!(path = %path.display(), error = %e, "save requested for a missing file");
            return Err(HostError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        match fs::write(path, data) {
            Ok(()) => {
                debug!(path = %path.display(), bytes = data.len(), "saved file");
                Ok(())
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to write file");
                Err(HostError::FileWrite {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        }
    }

    fn write_clipboard(&self, text: &str) -> Result<()> {
        let mut guard = self.clipboard.lock().map_err(|_| HostError::Clipboard {
            message: "clipboard lock poisoned".to_string(),
        })?;
        if guard.is_none() {
            match arboard::Clipboard::new() {
                Ok(created) => *guard = Some(created),
                Err(e) => {
                    warn!(error = %e, "system clipboard is unavailable");
                    return Err(HostError::Clipboard {
                        message: e.to_string(),
                    });
                }
            }
        }
        if let Some(clipboard) = guard.as_mut() {
            clipboard.set_text(text).map_err(|e| {
                warn!(error = %e, "failed to write to the system clipboard");
                HostError::Clipboard {
                    message: e.to_string(),
                }
            })?;
            debug!(bytes = text.len(), "replaced clipboard contents");
        }
        Ok(())
    }

    fn save_setting(&self, key: &str, value: Value) -> Result<()> {
        self.settings.set(key, value)
    }

    fn load_setting(&self, key: &str) -> Result<Option<Value>> {
        self.settings.get(key)
    }

    fn clear_settings(&self) -> Result<()> {
        self.settings.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn test_host(dir: &Path) -> DesktopHost {
        DesktopHost::with_settings(SettingsStore::open_at(dir.join("settings.json")))
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let host = test_host(dir.path());

        let err = host.load_file(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, HostError::FileNotFound { .. }));
    }

    #[test]
    fn save_never_creates_a_file() {
        let dir = tempdir().unwrap();
        let host = test_host(dir.path());
        let path = dir.path().join("absent.csv");

        let err = host.save_file(&path, "data").unwrap_err();
        assert!(matches!(err, HostError::FileNotFound { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn save_overwrites_an_existing_file() {
        let dir = tempdir().unwrap();
        let host = test_host(dir.path());
        let path = dir.path().join("terms.csv");
        fs::write(&path, "old").unwrap();

        host.save_file(&path, "new contents").unwrap();
        assert_eq!(host.load_file(&path).unwrap(), "new contents");
    }

    #[test]
    fn settings_round_trip_through_the_store() {
        let dir = tempdir().unwrap();
        let host = test_host(dir.path());

        host.save_setting("theme", json!("dark")).unwrap();
        assert_eq!(host.load_setting("theme").unwrap(), Some(json!("dark")));

        host.clear_settings().unwrap();
        assert_eq!(host.load_setting("theme").unwrap(), None);
    }
}
