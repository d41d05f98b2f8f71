//! Mock fetcher for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use url::Url;

use crate::fetcher::{FetchError, FetchedPage, Fetcher};

/// A recorded fetch for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedFetch {
    /// The URL that was requested.
    pub url: Url,
    /// When the fetch was made.
    pub timestamp: Instant,
}

/// Mock implementation of the Fetcher trait.
///
/// Provides controllable behavior for testing:
/// - Serve configured markup per URL, or a default page
/// - Track requested URLs for assertions
/// - Simulate failures, panics and slow responses
///
/// # Example
///
/// ```rust,ignore
/// use altscan_core::testing::MockFetcher;
///
/// let fetcher = MockFetcher::new();
/// fetcher.set_page("https://example.com/", r#"<img src="a.png">"#).await;
///
/// let page = fetcher.fetch(&"https://example.com/".parse()?).await?;
/// assert!(page.body.contains("a.png"));
/// assert_eq!(fetcher.recorded_fetches().await.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockFetcher {
    /// Markup served per exact URL.
    pages: Arc<RwLock<HashMap<String, String>>>,
    /// Markup served for any other URL.
    default_page: Arc<RwLock<Option<String>>>,
    /// Redirect targets reported as the final URL.
    redirects: Arc<RwLock<HashMap<String, Url>>>,
    /// If set, the next fetch will fail with this error.
    next_error: Arc<RwLock<Option<FetchError>>>,
    /// If set, every fetch fails with this error.
    persistent_error: Arc<RwLock<Option<FetchError>>>,
    /// If set, every fetch panics with this message.
    panic_message: Arc<RwLock<Option<String>>>,
    /// Simulated latency.
    delay: Arc<RwLock<Duration>>,
    /// Recorded fetches.
    fetches: Arc<RwLock<Vec<RecordedFetch>>>,
}

impl MockFetcher {
    /// Create a new mock fetcher that serves nothing (404 for every URL).
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for exactly `url`.
    pub async fn set_page(&self, url: &str, html: &str) {
        self.pages
            .write()
            .await
            .insert(url.to_string(), html.to_string());
    }

    /// Serve `html` for every URL without a specific page.
    pub async fn set_default_page(&self, html: &str) {
        *self.default_page.write().await = Some(html.to_string());
    }

    /// Report `target` as the final URL when `from` is fetched.
    pub async fn set_redirect(&self, from: &str, target: Url) {
        self.redirects.write().await.insert(from.to_string(), target);
    }

    /// Fail the next fetch with `error`.
    pub async fn set_next_error(&self, error: FetchError) {
        *self.next_error.write().await = Some(error);
    }

    /// Fail every fetch with `error` until cleared.
    pub async fn set_persistent_error(&self, error: Option<FetchError>) {
        *self.persistent_error.write().await = error;
    }

    /// Panic inside every fetch until cleared, to simulate a crashing worker.
    pub async fn set_panic_message(&self, message: Option<&str>) {
        *self.panic_message.write().await = message.map(str::to_string);
    }

    /// Delay every fetch by `delay`.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = delay;
    }

    /// Get recorded fetches.
    pub async fn recorded_fetches(&self) -> Vec<RecordedFetch> {
        self.fetches.read().await.clone()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        self.fetches.write().await.push(RecordedFetch {
            url: url.clone(),
            timestamp: Instant::now(),
        });

        let delay = *self.delay.read().await;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let panic_message = self.panic_message.read().await.clone();
        if let Some(message) = panic_message {
            panic!("{}", message);
        }

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }
        if let Some(error) = self.persistent_error.read().await.clone() {
            return Err(error);
        }

        let body = match self.pages.read().await.get(url.as_str()) {
            Some(html) => html.clone(),
            None => self
                .default_page
                .read()
                .await
                .clone()
                .ok_or(FetchError::Status { status: 404 })?,
        };

        let final_url = self
            .redirects
            .read()
            .await
            .get(url.as_str())
            .cloned()
            .unwrap_or_else(|| url.clone());

        Ok(FetchedPage {
            final_url,
            status: 200,
            body,
            attempts: 1,
        })
    }
}
