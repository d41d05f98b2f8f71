//! Types for alt-text auditing.

use serde::{Serialize, Serializer};
use url::Url;

use crate::extractor::OwnerKind;

/// Alternative text of a candidate, after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AltValue {
    /// No `alt` attribute.
    Absent,
    /// Attribute present but blank.
    Empty,
    /// Non-blank text.
    Text(String),
}

impl AltValue {
    /// Classify a raw attribute value.
    pub fn from_attribute(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None => Self::Absent,
            Some("") => Self::Empty,
            Some(text) => Self::Text(text.to_string()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn has_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Export rendering: `"absent"`, `""` or the text itself.
    pub fn render(&self) -> &str {
        match self {
            Self::Absent => "absent",
            Self::Empty => "",
            Self::Text(text) => text,
        }
    }
}

/// Serialized as `null`, `""` or the text.
impl Serialize for AltValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Empty => serializer.serialize_str(""),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

/// Accessibility defect detected on a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    MissingAlt,
    EmptyAlt,
    AltTooLong,
    AltEqualsFilename,
    SourceWithoutOwnAlt,
    ImageInLinkWithoutText,
    AltOverused,
}

impl IssueKind {
    /// Stable tag used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingAlt => "missing-alt",
            Self::EmptyAlt => "empty-alt",
            Self::AltTooLong => "alt-too-long",
            Self::AltEqualsFilename => "alt-equals-filename",
            Self::SourceWithoutOwnAlt => "source-without-own-alt",
            Self::ImageInLinkWithoutText => "image-in-link-without-text",
            Self::AltOverused => "alt-overused",
        }
    }

    /// Human-readable explanation.
    pub fn description(&self) -> &'static str {
        match self {
            Self::MissingAlt => "image has no alt attribute",
            Self::EmptyAlt => "alt is empty; verify the image is decorative",
            Self::AltTooLong => "alt text is probably too long",
            Self::AltEqualsFilename => "alt text repeats the image file name",
            Self::SourceWithoutOwnAlt => {
                "<source> has no alt of its own; check the associated <img>"
            }
            Self::ImageInLinkWithoutText => "linked image has no descriptive alt text",
            Self::AltOverused => "the same alt text is repeated across many images",
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An audited image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageCandidate {
    /// The page that was analyzed.
    pub page_url: Url,
    /// Absolute image URL.
    pub src_url: Url,
    pub owner: OwnerKind,
    pub alt: AltValue,
    pub in_link: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Issues in detection order.
    pub issues: Vec<IssueKind>,
}

impl ImageCandidate {
    pub fn has_issue(&self, issue: IssueKind) -> bool {
        self.issues.contains(&issue)
    }
}
