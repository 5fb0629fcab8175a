//! Persisted window settings.

use serde::{Deserialize, Serialize};

/// Settings-store key the window geometry is saved under.
pub const WINDOW_GEOMETRY_KEY: &str = "window_geometry";

/// Main-window bounds remembered across launches.
///
/// Serialized to an opaque JSON value in the host settings store, which
/// itself stays schema-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowGeometry {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Horizontal position; `None` lets the platform place the window.
    pub x: Option<i32>,
    /// Vertical position; `None` lets the platform place the window.
    pub y: Option<i32>,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            width: 960,
            height: 800,
            x: None,
            y: None,
        }
    }
}
