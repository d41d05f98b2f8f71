//! Deduplication of image candidates by (URL, owner kind).

use std::collections::HashSet;

use super::{OwnerKind, RawCandidate};

/// Drop candidates whose (absolute URL, owner kind) was already seen.
///
/// The first occurrence wins and document order is preserved. The same URL
/// on an `<img>` and on a `<source>` counts as two candidates.
pub fn deduplicate_candidates(raw: Vec<RawCandidate>) -> Vec<RawCandidate> {
    let mut seen: HashSet<(String, OwnerKind)> = HashSet::new();
    raw.into_iter()
        .filter(|candidate| seen.insert((candidate.src_url.as_str().to_string(), candidate.kind())))
        .collect()
}
