//! Types for page fetching.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// Errors that can occur while fetching a page.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The input could not be turned into an http(s) URL.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Connection could not be established or was interrupted.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The request did not complete in time.
    #[error("request timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// Non-success status that is not retried.
    #[error("HTTP {status}")]
    Status { status: u16 },

    /// Every attempt returned a transient status.
    #[error("gave up after {attempts} attempts (last status HTTP {last_status})")]
    RetriesExhausted { attempts: u32, last_status: u16 },

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}

impl FetchError {
    /// Creates a new invalid URL error.
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// A successfully retrieved page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after redirects; the default base for relative references.
    pub final_url: Url,
    /// HTTP status of the final response.
    pub status: u16,
    /// Decoded markup.
    pub body: String,
    /// Attempts spent, including the successful one.
    pub attempts: u32,
}

/// Retrieves raw markup for a page.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the page at `url`.
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError>;
}
