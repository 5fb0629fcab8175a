//! Editor-facing API for the master-data editor.
//!
//! This crate is the composition layer the editor UI calls into: every
//! operation pairs an injected [`HostBridge`](tms_host::HostBridge)
//! capability with the master-terms codec, returns a typed result
//! instead of a null sentinel and keeps platform diagnostics in the
//! logs rather than letting them reach the UI.
//!
//! Synchronous methods live on [`TermsApi`]; the `*_async` free
//! functions run the same operations on the blocking pool for callers
//! inside an async runtime, settling exactly once per call.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use tms_api::{TermsApi, sample};
//! use tms_host::MemoryHost;
//!
//! let host = MemoryHost::new();
//! host.insert_file("/data/terms.csv", sample::SAMPLE_MASTER_TERMS_CSV);
//!
//! let api = TermsApi::new(host);
//! let rows = api.load_master_terms(Path::new("/data/terms.csv")).unwrap();
//! assert_eq!(rows.len(), 14);
//! ```

mod api;
mod error;
pub mod sample;
mod settings;

pub use api::{
    TermsApi, load_file_async, load_master_terms_async, save_file_async, save_master_terms_async,
};
pub use error::{ApiError, Result};
pub use settings::{WINDOW_GEOMETRY_KEY, WindowGeometry};
