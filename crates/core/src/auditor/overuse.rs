//! Cross-candidate repeated alt-text detection.

use std::collections::HashMap;

use super::{ImageCandidate, IssueKind};

/// Flag alt texts that repeat more than `threshold` times on a page.
///
/// Occurrences are counted in document order; every occurrence after the
/// `threshold`-th receives `alt-overused`. Only non-blank text is counted.
pub fn flag_overused(candidates: &mut [ImageCandidate], threshold: usize) {
    let mut seen: HashMap<String, usize> = HashMap::new();

    for candidate in candidates.iter_mut() {
        let Some(text) = candidate.alt.as_text() else {
            continue;
        };
        let count = seen.entry(text.to_string()).or_insert(0);
        *count += 1;
        if *count > threshold {
            candidate.issues.push(IssueKind::AltOverused);
        }
    }
}
