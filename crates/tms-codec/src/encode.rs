//! Encoding of ordered rows into master-terms text.

use tms_model::TermRow;

use crate::{LINE_BREAK, MASTER_TERMS_HEADER};

/// Encodes rows as master-terms text.
///
/// The output starts with the fixed header line and every line, the last
/// one included, ends with CRLF. An empty slice yields just the header
/// line. Fields are written verbatim with no quoting or escaping, which
/// keeps the format symmetric with decoding: a comma or line break
/// inside a field value would corrupt column alignment on the way back
/// in.
pub fn serialize_master_terms(rows: &[TermRow]) -> String {
    let mut out = String::from(MASTER_TERMS_HEADER);
    out.push_str(LINE_BREAK);
    for row in rows {
        let fields = [
            row.id.as_str(),
            row.taxonomy.as_str(),
            row.name.as_str(),
            row.slug.as_str(),
            row.parent.as_str(),
        ];
        out.push_str(&fields.join(","));
        out.push_str(LINE_BREAK);
    }
    out
}
