//! Host capabilities for the master-data editor.
//!
//! The desktop shell (window creation, process wiring) lives outside
//! this workspace; everything it brokers on behalf of the editor is
//! modeled here as the [`HostBridge`] capability trait: whole-file text
//! I/O, system clipboard writes and a schema-free key/value settings
//! store.
//!
//! Two implementations ship with the crate. [`DesktopHost`] talks to
//! the real platform and is what the shell injects in production.
//! [`MemoryHost`] keeps all three capabilities in process memory with
//! the same observable contract, so the layers above stay testable
//! without a desktop session.

mod bridge;
mod desktop;
mod error;
mod memory;
mod settings;

pub use bridge::HostBridge;
pub use desktop::DesktopHost;
pub use error::{HostError, Result};
pub use memory::MemoryHost;
pub use settings::SettingsStore;
