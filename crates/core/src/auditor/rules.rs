//! Per-candidate alt-text rules.

use url::Url;

use crate::config::AuditorConfig;
use crate::extractor::{ImageOwner, RawCandidate};

use super::{AltValue, IssueKind};

/// Apply the local rules to one candidate.
///
/// Each rule fires at most once; issues are returned in rule order.
pub fn audit_candidate(
    candidate: &RawCandidate,
    config: &AuditorConfig,
) -> (AltValue, Vec<IssueKind>) {
    let mut issues = Vec::new();

    let alt = match &candidate.owner {
        ImageOwner::Img { alt } => {
            let alt = AltValue::from_attribute(alt.as_deref());
            match &alt {
                AltValue::Absent => issues.push(IssueKind::MissingAlt),
                AltValue::Empty => issues.push(IssueKind::EmptyAlt),
                AltValue::Text(text) => {
                    if text.chars().count() > config.max_alt_length {
                        issues.push(IssueKind::AltTooLong);
                    }
                    if alt_matches_filename(text, &candidate.src_url) {
                        issues.push(IssueKind::AltEqualsFilename);
                    }
                }
            }
            alt
        }
        ImageOwner::Source => {
            issues.push(IssueKind::SourceWithoutOwnAlt);
            AltValue::Absent
        }
    };

    if candidate.in_link && !alt.has_text() {
        issues.push(IssueKind::ImageInLinkWithoutText);
    }

    (alt, issues)
}

/// Whether the alt text starts with the image's file name (case-insensitive).
pub fn alt_matches_filename(alt: &str, src_url: &Url) -> bool {
    match file_name(src_url) {
        Some(name) => alt.trim().to_lowercase().starts_with(&name),
        None => false,
    }
}

/// Last path segment, percent-decoded and lowercased. `None` for directory URLs.
fn file_name(src_url: &Url) -> Option<String> {
    let segment = src_url.path_segments()?.last()?;
    if segment.is_empty() {
        return None;
    }
    let decoded = urlencoding::decode(segment)
        .map(|name| name.into_owned())
        .unwrap_or_else(|_| segment.to_string());
    Some(decoded.to_lowercase())
}
