//! Alt-text auditing.
//!
//! Local rules run per candidate (`rules`), then one page-wide pass flags
//! repeated alt text (`overuse`).

mod overuse;
mod rules;
mod types;

pub use overuse::flag_overused;
pub use rules::{alt_matches_filename, audit_candidate};
pub use types::*;

use url::Url;

use crate::config::AuditorConfig;
use crate::extractor::RawCandidate;
use crate::metrics::{IMAGES_AUDITED, ISSUES_DETECTED};

/// Audit every candidate of a page, preserving order.
pub fn audit_all(
    page_url: &Url,
    candidates: Vec<RawCandidate>,
    config: &AuditorConfig,
) -> Vec<ImageCandidate> {
    let mut audited: Vec<ImageCandidate> = candidates
        .into_iter()
        .map(|candidate| {
            let (alt, issues) = audit_candidate(&candidate, config);
            ImageCandidate {
                page_url: page_url.clone(),
                owner: candidate.kind(),
                src_url: candidate.src_url,
                alt,
                in_link: candidate.in_link,
                role: candidate.role,
                issues,
            }
        })
        .collect();

    flag_overused(&mut audited, config.overuse_threshold);

    IMAGES_AUDITED.inc_by(audited.len() as u64);
    for issue in audited.iter().flat_map(|c| c.issues.iter()) {
        ISSUES_DETECTED.with_label_values(&[issue.as_str()]).inc();
    }

    audited
}
