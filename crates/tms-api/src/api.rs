//! Master-data operations composed over the host bridge.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use tms_codec::{parse_master_terms, serialize_master_terms};
use tms_host::HostBridge;
use tms_model::TermRow;

use crate::error::{ApiError, Result};
use crate::settings::{WINDOW_GEOMETRY_KEY, WindowGeometry};

/// The operations the editor works with.
///
/// Generic over the injected [`HostBridge`] capability, so the same
/// surface runs against the desktop platform in production and against
/// [`MemoryHost`](tms_host::MemoryHost) in tests.
pub struct TermsApi<H> {
    host: H,
}

impl<H: HostBridge> TermsApi<H> {
    /// Wrap a host capability.
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// The underlying host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Read the whole file at `path` as text.
    pub fn load_file(&self, path: &Path) -> Result<String> {
        Ok(self.host.load_file(path)?)
    }

    /// Overwrite the file at `path`. The target must already exist.
    pub fn save_file(&self, path: &Path, data: &str) -> Result<()> {
        Ok(self.host.save_file(path, data)?)
    }

    /// Load and decode a master-terms file.
    ///
    /// A failed decode comes back as [`ApiError::Parse`]; the caller
    /// shows [`user_message`](ApiError::user_message) and keeps the rows
    /// it already had.
    pub fn load_master_terms(&self, path: &Path) -> Result<Vec<TermRow>> {
        let raw = self.host.load_file(path)?;
        let rows = parse_master_terms(&raw)?;
        info!(path = %path.display(), rows = rows.len(), "loaded master terms");
        Ok(rows)
    }

    /// Encode `rows` and overwrite the master-terms file at `path`.
    pub fn save_master_terms(&self, path: &Path, rows: &[TermRow]) -> Result<()> {
        let data = serialize_master_terms(rows);
        self.host.save_file(path, &data)?;
        info!(path = %path.display(), rows = rows.len(), "saved master terms");
        Ok(())
    }

    /// Replace the system clipboard text.
    pub fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        Ok(self.host.write_clipboard(text)?)
    }

    /// Encode `rows` and put the result on the clipboard, ready to paste
    /// into a spreadsheet or the importer on the WordPress side.
    pub fn copy_master_terms_to_clipboard(&self, rows: &[TermRow]) -> Result<()> {
        self.copy_to_clipboard(&serialize_master_terms(rows))
    }

    /// Remember the window bounds for the next launch.
    pub fn save_window_geometry(&self, geometry: &WindowGeometry) -> Result<()> {
        let value = serde_json::to_value(geometry).map_err(|e| ApiError::SettingsCodec {
            message: e.to_string(),
        })?;
        self.host.save_setting(WINDOW_GEOMETRY_KEY, value)?;
        debug!(?geometry, "stored window geometry");
        Ok(())
    }

    /// Window bounds stored by a previous session.
    ///
    /// `Ok(None)` covers both "nothing stored yet" and a stored value
    /// this build can no longer decode; launch must not fail over stale
    /// settings, so the latter only logs a warning.
    pub fn load_window_geometry(&self) -> Result<Option<WindowGeometry>> {
        let Some(value) = self.host.load_setting(WINDOW_GEOMETRY_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_value(value) {
            Ok(geometry) => Ok(Some(geometry)),
            Err(e) => {
                warn!(error = %e, "stored window geometry is unreadable, ignoring it");
                Ok(None)
            }
        }
    }

    /// Drop every stored setting.
    pub fn clear_stored_settings(&self) -> Result<()> {
        Ok(self.host.clear_settings()?)
    }
}

/// Read a file on the blocking pool.
///
/// Resolves exactly once, after the read settles either way.
pub async fn load_file_async<H>(api: Arc<TermsApi<H>>, path: PathBuf) -> Result<String>
where
    H: HostBridge + 'static,
{
    run_blocking(move || api.load_file(&path)).await
}

/// Overwrite a file on the blocking pool.
pub async fn save_file_async<H>(api: Arc<TermsApi<H>>, path: PathBuf, data: String) -> Result<()>
where
    H: HostBridge + 'static,
{
    run_blocking(move || api.save_file(&path, &data)).await
}

/// Load and decode a master-terms file on the blocking pool.
pub async fn load_master_terms_async<H>(
    api: Arc<TermsApi<H>>,
    path: PathBuf,
) -> Result<Vec<TermRow>>
where
    H: HostBridge + 'static,
{
    run_blocking(move || api.load_master_terms(&path)).await
}

/// Encode and save a master-terms file on the blocking pool.
pub async fn save_master_terms_async<H>(
    api: Arc<TermsApi<H>>,
    path: PathBuf,
    rows: Vec<TermRow>,
) -> Result<()>
where
    H: HostBridge + 'static,
{
    run_blocking(move || api.save_master_terms(&path, &rows)).await
}

/// Run a blocking host operation off the async runtime.
async fn run_blocking<T, F>(operation: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(operation)
        .await
        .map_err(|e| ApiError::TaskFailed {
            message: e.to_string(),
        })?
}
