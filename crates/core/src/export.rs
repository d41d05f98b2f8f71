//! Flat per-image rows for report writers.

use serde::Serialize;

use crate::auditor::ImageCandidate;

/// One exported image row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateRecord {
    pub page_url: String,
    pub src_url: String,
    /// `img` or `source`.
    pub element: String,
    /// `"absent"`, `""` or the alt text.
    pub alt: String,
    pub in_link: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub issues: Vec<String>,
    /// Human-readable description per issue, same order as `issues`.
    pub notes: Vec<String>,
}

impl From<&ImageCandidate> for CandidateRecord {
    fn from(candidate: &ImageCandidate) -> Self {
        Self {
            page_url: candidate.page_url.to_string(),
            src_url: candidate.src_url.to_string(),
            element: candidate.owner.as_str().to_string(),
            alt: candidate.alt.render().to_string(),
            in_link: candidate.in_link,
            role: candidate.role.clone(),
            issues: candidate
                .issues
                .iter()
                .map(|issue| issue.as_str().to_string())
                .collect(),
            notes: candidate
                .issues
                .iter()
                .map(|issue| issue.description().to_string())
                .collect(),
        }
    }
}
