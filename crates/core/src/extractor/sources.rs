//! Attribute preference for locating an element's image URL.

use once_cell::sync::Lazy;
use regex_lite::Regex;

/// Lazy-loading attributes, checked in this order after `src`.
pub const LAZY_LOAD_ATTRIBUTES: [&str; 4] = ["data-src", "data-lazy-src", "data-original", "data-img"];

static BACKGROUND_IMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)background-image\s*:\s*url\(([^)]+)\)").expect("valid background-image regex")
});

/// Pick the raw image URL for an element.
///
/// Order: `src`, the lazy-load attributes, the first `srcset` entry, then an
/// inline `background-image`. The first non-blank value wins.
pub fn resolve_raw_source<'a, F>(attr: F) -> Option<String>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let direct = std::iter::once("src")
        .chain(LAZY_LOAD_ATTRIBUTES)
        .filter_map(|name| non_blank(attr(name)))
        .next();
    if let Some(value) = direct {
        return Some(value.to_string());
    }

    if let Some(first) = attr("srcset").and_then(first_from_srcset) {
        return Some(first.to_string());
    }

    attr("style").and_then(background_image_url)
}

/// First candidate URL of a `srcset`, ignoring its descriptor.
pub fn first_from_srcset(srcset: &str) -> Option<&str> {
    srcset
        .split(',')
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .and_then(|candidate| candidate.split_whitespace().next())
}

/// URL inside an inline `background-image: url(...)` declaration.
pub fn background_image_url(style: &str) -> Option<String> {
    let captures = BACKGROUND_IMAGE.captures(style)?;
    let value = captures
        .get(1)?
        .as_str()
        .trim_matches(|c: char| c == '"' || c == '\'' || c.is_whitespace());
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
