//! Types for image candidate extraction.

use serde::{Deserialize, Serialize};
use url::Url;

/// Kind of element an image reference was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerKind {
    /// `<img>`
    Img,
    /// `<source>` inside `<picture>`
    Source,
}

impl OwnerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Img => "img",
            Self::Source => "source",
        }
    }
}

/// The element that owns an image reference, with the attributes the
/// auditor needs from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOwner {
    /// Primary image element with its raw `alt` attribute (`None` = absent).
    Img { alt: Option<String> },
    /// Responsive source; it has no alternative text of its own.
    Source,
}

impl ImageOwner {
    pub fn kind(&self) -> OwnerKind {
        match self {
            Self::Img { .. } => OwnerKind::Img,
            Self::Source => OwnerKind::Source,
        }
    }
}

/// An image reference discovered in markup, before auditing.
#[derive(Debug, Clone)]
pub struct RawCandidate {
    /// Absolute image URL.
    pub src_url: Url,
    pub owner: ImageOwner,
    /// Parent element is an `<a>`.
    pub in_link: bool,
    /// `role` attribute, verbatim.
    pub role: Option<String>,
}

impl RawCandidate {
    pub fn kind(&self) -> OwnerKind {
        self.owner.kind()
    }
}

/// Result of extracting candidates from one document.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Base used to resolve relative references.
    pub base_url: Url,
    /// Unique candidates in document order.
    pub candidates: Vec<RawCandidate>,
    /// Parse errors the HTML parser recovered from.
    pub parse_errors: usize,
    /// Elements skipped because no usable URL could be resolved.
    pub unresolved: usize,
    /// Candidates dropped as duplicates.
    pub duplicates: usize,
}
