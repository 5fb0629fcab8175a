use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parent id value marking a term as a root of its taxonomy tree.
pub const NO_PARENT: &str = "0";

/// WordPress taxonomy a term can belong to.
///
/// Master files carry the taxonomy as a free-form string and the codec
/// never validates it; this enum covers the two values WordPress actually
/// exports, for callers that want to branch on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Taxonomy {
    Category,
    PostTag,
}

impl Taxonomy {
    /// Returns the identifier as it appears in master files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Taxonomy::Category => "category",
            Taxonomy::PostTag => "post_tag",
        }
    }

    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Taxonomy::Category => "Category",
            Taxonomy::PostTag => "Post tag",
        }
    }
}

impl fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Taxonomy {
    type Err = String;

    /// Parse a taxonomy identifier. Exact match only: master files carry
    /// the identifiers verbatim, so no trimming or case folding happens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(Taxonomy::Category),
            "post_tag" => Ok(Taxonomy::PostTag),
            _ => Err(format!("Unknown taxonomy: {}", s)),
        }
    }
}

/// One master-data row: a single category or post tag.
///
/// Field order mirrors the file layout (id, taxonomy, name, slug,
/// parent). All fields are plain strings and none are validated here;
/// id uniqueness, parent references and the taxonomy vocabulary are the
/// caller's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRow {
    /// Term identifier, unique within a well-formed master file.
    pub id: String,
    /// Taxonomy identifier, `category` or `post_tag` in practice.
    pub taxonomy: String,
    /// Display name of the term.
    pub name: String,
    /// URL-safe identifier.
    pub slug: String,
    /// Parent term id, `"0"` for roots.
    pub parent: String,
}

impl TermRow {
    pub fn new(
        id: impl Into<String>,
        taxonomy: impl Into<String>,
        name: impl Into<String>,
        slug: impl Into<String>,
        parent: impl Into<String>,
    ) -> Self {
        TermRow {
            id: id.into(),
            taxonomy: taxonomy.into(),
            name: name.into(),
            slug: slug.into(),
            parent: parent.into(),
        }
    }

    /// Returns true when the row sits at the root of its taxonomy tree.
    pub fn is_root(&self) -> bool {
        self.parent == NO_PARENT
    }

    /// Returns the recognized taxonomy, or None when the row carries a
    /// string outside the WordPress vocabulary.
    pub fn taxonomy_kind(&self) -> Option<Taxonomy> {
        self.taxonomy.parse().ok()
    }
}
