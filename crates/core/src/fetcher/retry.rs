//! Retry policy for transient HTTP statuses.

use std::time::Duration;

use crate::config::RetryConfig;

/// Statuses worth another attempt: rate limiting and transient server faults.
pub const RETRY_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Whether a response status is retried.
pub fn is_retryable_status(status: u16) -> bool {
    RETRY_STATUSES.contains(&status)
}

/// Parse a `Retry-After` header given in delay-seconds.
///
/// The HTTP-date form is ignored and falls back to computed backoff.
pub fn parse_retry_after(value: &str) -> Option<Duration> {
    value.trim().parse::<u64>().ok().map(Duration::from_secs)
}

/// Bounded exponential backoff.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Total attempts allowed, including the first one.
    pub fn max_attempts(&self) -> u32 {
        self.config.max_retries.saturating_add(1)
    }

    /// Computed delay before retry number `retry` (1-based).
    pub fn backoff(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(i32::MAX as u32) as i32;
        let delay_ms =
            self.config.initial_delay_ms as f64 * self.config.backoff_multiplier.powi(exponent);
        let capped = delay_ms.min(self.config.max_delay_ms as f64);
        Duration::from_millis(capped as u64)
    }

    /// Delay before retry number `retry`.
    ///
    /// A server hint can lengthen the computed backoff but never shorten it.
    pub fn delay_before_retry(&self, retry: u32, retry_after: Option<Duration>) -> Duration {
        let backoff = self.backoff(retry);
        let cap = Duration::from_millis(self.config.max_delay_ms);
        match retry_after {
            Some(hint) if self.config.respect_retry_after => hint.max(backoff).min(cap),
            _ => backoff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(initial: u64, multiplier: f64, max: u64) -> RetryPolicy {
        RetryPolicy::new(RetryConfig {
            max_retries: 3,
            initial_delay_ms: initial,
            backoff_multiplier: multiplier,
            max_delay_ms: max,
            respect_retry_after: true,
        })
    }

    #[test]
    fn test_retryable_statuses() {
        for status in [429, 500, 502, 503, 504] {
            assert!(is_retryable_status(status), "{} should be retried", status);
        }
        for status in [200, 301, 400, 401, 403, 404, 501] {
            assert!(!is_retryable_status(status), "{} should not be retried", status);
        }
    }

    #[test]
    fn test_backoff_grows_exponentially() {
        let policy = policy(600, 2.0, 30_000);
        assert_eq!(policy.backoff(1), Duration::from_millis(600));
        assert_eq!(policy.backoff(2), Duration::from_millis(1200));
        assert_eq!(policy.backoff(3), Duration::from_millis(2400));
    }

    #[test]
    fn test_backoff_is_capped() {
        let policy = policy(1000, 10.0, 5000);
        assert_eq!(policy.backoff(1), Duration::from_millis(1000));
        assert_eq!(policy.backoff(2), Duration::from_millis(5000));
        assert_eq!(policy.backoff(40), Duration::from_millis(5000));
    }

    #[test]
    fn test_max_attempts_counts_first_try() {
        assert_eq!(policy(1, 1.0, 1).max_attempts(), 4);
        assert_eq!(RetryPolicy::new(RetryConfig::disabled()).max_attempts(), 1);
    }

    #[test]
    fn test_retry_after_hint_is_capped() {
        let policy = policy(100, 2.0, 2000);
        assert_eq!(
            policy.delay_before_retry(1, Some(Duration::from_secs(1))),
            Duration::from_secs(1)
        );
        assert_eq!(
            policy.delay_before_retry(1, Some(Duration::from_secs(60))),
            Duration::from_millis(2000)
        );
        assert_eq!(policy.delay_before_retry(2, None), Duration::from_millis(200));
    }

    #[test]
    fn test_retry_after_hint_never_undercuts_backoff() {
        let policy = policy(100, 2.0, 2000);
        assert_eq!(
            policy.delay_before_retry(1, Some(Duration::ZERO)),
            Duration::from_millis(100)
        );
        assert_eq!(
            policy.delay_before_retry(3, Some(Duration::from_millis(50))),
            Duration::from_millis(400)
        );
    }

    #[test]
    fn test_retry_after_hint_ignored_when_disabled() {
        let policy = RetryPolicy::new(RetryConfig {
            initial_delay_ms: 50,
            respect_retry_after: false,
            ..RetryConfig::default()
        });
        assert_eq!(
            policy.delay_before_retry(1, Some(Duration::from_secs(9))),
            Duration::from_millis(50)
        );
    }

    #[test]
    fn test_parse_retry_after() {
        assert_eq!(parse_retry_after("3"), Some(Duration::from_secs(3)));
        assert_eq!(parse_retry_after(" 0 "), Some(Duration::ZERO));
        assert_eq!(parse_retry_after("Wed, 21 Oct 2015 07:28:00 GMT"), None);
    }
}
