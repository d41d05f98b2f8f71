//! Image candidate extraction from page markup.
//!
//! Visits `<img>` elements and `<source>` elements nested in `<picture>`, in
//! document order, resolves each one's image URL against the document base,
//! and removes duplicate (URL, owner kind) pairs.

mod dedup;
mod sources;
mod types;

pub use dedup::deduplicate_candidates;
pub use sources::{background_image_url, first_from_srcset, resolve_raw_source, LAZY_LOAD_ATTRIBUTES};
pub use types::*;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

static IMAGE_ELEMENTS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img, picture source").expect("valid image selector"));

static BASE_ELEMENT: Lazy<Selector> =
    Lazy::new(|| Selector::parse("base[href]").expect("valid base selector"));

/// Extract image candidates from `html`, resolving against `page_url`.
///
/// Never fails: malformed markup is repaired by the parser and elements
/// without a usable URL are skipped.
pub fn extract(html: &str, page_url: &Url) -> Extraction {
    let document = Html::parse_document(html);
    let base_url = document_base(&document, page_url);

    let mut candidates = Vec::new();
    let mut unresolved = 0;

    for element in document.select(&IMAGE_ELEMENTS) {
        let value = element.value();
        let Some(raw) = resolve_raw_source(|name| value.attr(name)) else {
            unresolved += 1;
            continue;
        };

        let src_url = match base_url.join(&raw) {
            Ok(url) => url,
            Err(e) => {
                debug!(raw = %raw, error = %e, "Skipping unresolvable image reference");
                unresolved += 1;
                continue;
            }
        };

        let owner = match value.name() {
            "img" => ImageOwner::Img {
                alt: value.attr("alt").map(str::to_string),
            },
            _ => ImageOwner::Source,
        };

        candidates.push(RawCandidate {
            src_url,
            owner,
            in_link: parent_is_anchor(&element),
            role: value.attr("role").map(str::to_string),
        });
    }

    let found = candidates.len();
    let candidates = deduplicate_candidates(candidates);
    let duplicates = found - candidates.len();
    let parse_errors = document.errors.len();

    debug!(
        base = %base_url,
        candidates = candidates.len(),
        duplicates,
        unresolved,
        parse_errors,
        "Extracted image candidates"
    );

    Extraction {
        base_url,
        candidates,
        parse_errors,
        unresolved,
        duplicates,
    }
}

/// The document's `<base href>` resolved against the page URL, if usable.
fn document_base(document: &Html, page_url: &Url) -> Url {
    document
        .select(&BASE_ELEMENT)
        .next()
        .and_then(|base| base.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .and_then(|href| page_url.join(href).ok())
        .unwrap_or_else(|| page_url.clone())
}

fn parent_is_anchor(element: &ElementRef<'_>) -> bool {
    element
        .parent()
        .and_then(|parent| parent.value().as_element().map(|el| el.name() == "a"))
        .unwrap_or(false)
}
