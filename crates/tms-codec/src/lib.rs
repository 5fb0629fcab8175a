//! Reader and writer for the master-terms delimited text format.
//!
//! A master-terms file is the flat export of a WordPress taxonomy setup:
//! one header line, then one line per term with five positional
//! comma-separated fields (id, taxonomy, name, slug, parent). The format
//! is deliberately primitive. There is no quoting or escaping, so a
//! comma or line break inside a field value corrupts column alignment;
//! the editor this crate serves never produces such values, and the
//! limitation is kept so files stay byte-compatible with the other tools
//! that read them.
//!
//! Decoding tolerates both CRLF and LF line endings; encoding always
//! emits CRLF, with a terminator after every line including the last.
//!
//! # Example
//!
//! ```
//! use tms_codec::{parse_master_terms, serialize_master_terms};
//! use tms_model::TermRow;
//!
//! let rows = vec![TermRow::new("1", "category", "News", "news", "0")];
//! let text = serialize_master_terms(&rows);
//! assert_eq!(parse_master_terms(&text).unwrap(), rows);
//! ```

mod decode;
mod encode;
mod error;

pub use decode::parse_master_terms;
pub use encode::serialize_master_terms;
pub use error::{ParseError, Result};

/// Header line of a master-terms file, without its line terminator.
pub const MASTER_TERMS_HEADER: &str = "id,taxonomy,name,slug,parent";

/// Line terminator written by the encoder.
pub(crate) const LINE_BREAK: &str = "\r\n";
