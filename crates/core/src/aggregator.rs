//! Page-level summary counters.

use serde::Serialize;
use url::Url;

use crate::auditor::{AltValue, ImageCandidate};

/// Counters for one audited page.
///
/// `total == with_text + absent_attribute + empty_attribute` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditSummary {
    pub source_url: Url,
    pub total: usize,
    pub with_text: usize,
    pub absent_attribute: usize,
    pub empty_attribute: usize,
    pub in_link_count: usize,
    pub with_issues_count: usize,
}

/// Count the audited candidates of a page.
pub fn aggregate(source_url: &Url, candidates: &[ImageCandidate]) -> AuditSummary {
    let mut summary = AuditSummary {
        source_url: source_url.clone(),
        total: candidates.len(),
        with_text: 0,
        absent_attribute: 0,
        empty_attribute: 0,
        in_link_count: 0,
        with_issues_count: 0,
    };

    for candidate in candidates {
        match candidate.alt {
            AltValue::Text(_) => summary.with_text += 1,
            AltValue::Absent => summary.absent_attribute += 1,
            AltValue::Empty => summary.empty_attribute += 1,
        }
        if candidate.in_link {
            summary.in_link_count += 1;
        }
        if !candidate.issues.is_empty() {
            summary.with_issues_count += 1;
        }
    }

    summary
}
