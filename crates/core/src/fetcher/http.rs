//! reqwest-backed page fetcher.

use async_trait::async_trait;
use reqwest::{header::RETRY_AFTER, Client};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::config::FetcherConfig;
use crate::metrics::FETCH_ATTEMPTS;

use super::retry::{is_retryable_status, parse_retry_after, RetryPolicy};
use super::{FetchError, FetchedPage, Fetcher};

/// Fetches pages over HTTP(S) with a timeout and transient-status retries.
pub struct HttpFetcher {
    client: Client,
    policy: RetryPolicy,
    timeout_secs: u64,
}

impl HttpFetcher {
    /// Create a new HttpFetcher with the given configuration.
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            policy: RetryPolicy::new(config.retry.clone()),
            timeout_secs: config.timeout_secs,
        })
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            FetchError::Connection(err.to_string())
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let max_attempts = self.policy.max_attempts();
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!(url = %url, attempt, "Fetching page");

            let response = match self.client.get(url.clone()).send().await {
                Ok(response) => response,
                Err(e) => {
                    FETCH_ATTEMPTS.with_label_values(&["error"]).inc();
                    return Err(self.classify(e));
                }
            };

            let status = response.status();
            if status.is_success() {
                FETCH_ATTEMPTS.with_label_values(&["success"]).inc();
                let final_url = response.url().clone();
                let body = response.text().await.map_err(|e| {
                    if e.is_timeout() {
                        self.classify(e)
                    } else {
                        FetchError::Body(e.to_string())
                    }
                })?;
                debug!(url = %final_url, bytes = body.len(), attempts = attempt, "Page fetched");
                return Ok(FetchedPage {
                    final_url,
                    status: status.as_u16(),
                    body,
                    attempts: attempt,
                });
            }

            let code = status.as_u16();
            if !is_retryable_status(code) {
                FETCH_ATTEMPTS.with_label_values(&["failed_status"]).inc();
                return Err(FetchError::Status { status: code });
            }

            FETCH_ATTEMPTS.with_label_values(&["retryable_status"]).inc();
            if attempt >= max_attempts {
                return Err(FetchError::RetriesExhausted {
                    attempts: attempt,
                    last_status: code,
                });
            }

            let hint = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(parse_retry_after);
            let delay = self.policy.delay_before_retry(attempt, hint);
            warn!(
                url = %url,
                status = code,
                attempt,
                delay_ms = delay.as_millis() as u64,
                "Transient status, retrying"
            );
            tokio::time::sleep(delay).await;
        }
    }
}
