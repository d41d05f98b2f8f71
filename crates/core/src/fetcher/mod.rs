//! Page retrieval.
//!
//! This module provides a `Fetcher` trait for retrieving the raw markup of a
//! page, URL normalization for user input, and the reqwest-backed
//! `HttpFetcher` with bounded exponential backoff on transient statuses.

mod http;
mod retry;
mod types;

pub use http::HttpFetcher;
pub use retry::{is_retryable_status, parse_retry_after, RetryPolicy, RETRY_STATUSES};
pub use types::*;

use url::Url;

/// Scheme prefixed to input that does not name one.
pub const DEFAULT_SCHEME: &str = "https";

/// Normalize user input into an absolute http(s) URL.
///
/// Input without a `scheme://` prefix is assumed to be `https`.
pub fn normalize_url(input: &str) -> Result<Url, FetchError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FetchError::invalid_url(input, "URL is empty"));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("{}://{}", DEFAULT_SCHEME, trimmed)
    };

    let url = Url::parse(&candidate).map_err(|e| FetchError::invalid_url(trimmed, e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(FetchError::invalid_url(
                trimmed,
                format!("unsupported scheme '{}'", other),
            ))
        }
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(FetchError::invalid_url(trimmed, "URL has no host"));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_default_scheme() {
        let url = normalize_url("example.com/gallery").unwrap();
        assert_eq!(url.as_str(), "https://example.com/gallery");
    }

    #[test]
    fn test_normalize_keeps_explicit_scheme() {
        let url = normalize_url("  http://example.com/a?b=1#top ").unwrap();
        assert_eq!(url.as_str(), "http://example.com/a?b=1#top");
    }

    #[test]
    fn test_normalize_rejects_empty() {
        let err = normalize_url("   ").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[test]
    fn test_normalize_rejects_unsupported_scheme() {
        let err = normalize_url("ftp://example.com/file").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_normalize_rejects_malformed() {
        assert!(normalize_url("not a url").is_err());
        assert!(normalize_url("https://").is_err());
    }
}
