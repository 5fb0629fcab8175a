//! Decoding of raw master-terms text into ordered rows.

use tms_model::TermRow;

use crate::error::{ParseError, Result};

/// Decodes the raw text of a master-terms file into rows.
///
/// Line 0 is dropped as the header without inspecting its content. Every
/// later line that contains a comma becomes one row, built by position
/// from its first five fields: surplus fields are ignored, missing
/// trailing fields come back empty, and field bytes are kept verbatim
/// with no trimming. Lines without a comma (blank lines included) are
/// skipped silently, so row index no longer matches line number after a
/// skip. Carriage returns are stripped before splitting, which makes
/// CRLF and LF input decode identically.
///
/// # Errors
///
/// Returns [`ParseError::EmptyInput`] for empty text and
/// [`ParseError::NotDelimited`] when the first comma is absent or sits
/// at offset 0. Such text cannot be a master-terms file; callers keep
/// their previous rows.
pub fn parse_master_terms(raw: &str) -> Result<Vec<TermRow>> {
    if raw.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    match raw.find(',') {
        None | Some(0) => return Err(ParseError::NotDelimited),
        Some(_) => {}
    }

    let normalized = raw.replace('\r', "");
    let mut rows = Vec::new();
    for (index, line) in normalized.split('\n').enumerate() {
        if index == 0 {
            // Header line, never data.
            continue;
        }
        if !line.contains(',') {
            tracing::debug!(line = index, "skipping line without delimiter");
            continue;
        }
        rows.push(row_from_line(line));
    }
    Ok(rows)
}

/// Builds one row from the first five comma-separated fields of a line.
fn row_from_line(line: &str) -> TermRow {
    let mut fields = line.split(',');
    let mut next = || fields.next().unwrap_or_default().to_string();
    TermRow {
        id: next(),
        taxonomy: next(),
        name: next(),
        slug: next(),
        parent: next(),
    }
}
