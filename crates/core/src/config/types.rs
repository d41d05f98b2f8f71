use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub auditor: AuditorConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

/// Page fetcher configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetcherConfig {
    /// Whole-request timeout in seconds (default: 12)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User-Agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Retry policy for transient statuses
    #[serde(default)]
    pub retry: RetryConfig,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
            retry: RetryConfig::default(),
        }
    }
}

fn default_timeout() -> u64 {
    12
}

fn default_user_agent() -> String {
    format!(
        "altscan/{} (+https://github.com/altscan/altscan)",
        env!("CARGO_PKG_VERSION")
    )
}

/// Retry configuration for transient HTTP statuses.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetryConfig {
    /// Retries after the first attempt.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay before the first retry in milliseconds.
    #[serde(default = "default_initial_delay")]
    pub initial_delay_ms: u64,

    /// Exponential backoff multiplier.
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,

    /// Upper bound for any single delay in milliseconds.
    #[serde(default = "default_max_delay")]
    pub max_delay_ms: u64,

    /// Use a numeric `Retry-After` header instead of the computed delay.
    #[serde(default = "default_respect_retry_after")]
    pub respect_retry_after: bool,
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_delay() -> u64 {
    600
}

fn default_backoff_multiplier() -> f64 {
    2.0
}

fn default_max_delay() -> u64 {
    30_000
}

fn default_respect_retry_after() -> bool {
    true
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            initial_delay_ms: default_initial_delay(),
            backoff_multiplier: default_backoff_multiplier(),
            max_delay_ms: default_max_delay(),
            respect_retry_after: default_respect_retry_after(),
        }
    }
}

impl RetryConfig {
    /// A policy that never retries.
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }
}

/// Heuristic thresholds for the alt-text rules
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditorConfig {
    /// Alt text longer than this (in characters) is flagged.
    #[serde(default = "default_max_alt_length")]
    pub max_alt_length: usize,
    /// A text value seen more than this many times is flagged as overused.
    #[serde(default = "default_overuse_threshold")]
    pub overuse_threshold: usize,
}

impl Default for AuditorConfig {
    fn default() -> Self {
        Self {
            max_alt_length: default_max_alt_length(),
            overuse_threshold: default_overuse_threshold(),
        }
    }
}

fn default_max_alt_length() -> usize {
    150
}

fn default_overuse_threshold() -> usize {
    3
}
