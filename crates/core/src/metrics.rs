//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Audit runs (outcome, duration)
//! - Page fetching (attempts by outcome)
//! - Auditing (images audited, issues by tag)

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

// =============================================================================
// Session - Run Metrics
// =============================================================================

/// Runs total by result.
pub static RUNS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("altscan_runs_total", "Total audit runs"),
        &["result"], // "success", "invalid_url", "network", "unexpected"
    )
    .unwrap()
});

/// Run duration in seconds.
pub static RUN_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new("altscan_run_duration_seconds", "Duration of audit runs")
            .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        &["result"],
    )
    .unwrap()
});

// =============================================================================
// Fetcher Metrics
// =============================================================================

/// HTTP attempts made by the fetcher.
pub static FETCH_ATTEMPTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("altscan_fetch_attempts_total", "Total page fetch attempts"),
        &["outcome"], // "success", "retryable_status", "failed_status", "error"
    )
    .unwrap()
});

// =============================================================================
// Auditor Metrics
// =============================================================================

/// Image candidates audited.
pub static IMAGES_AUDITED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("altscan_images_audited_total", "Total image candidates audited").unwrap()
});

/// Issues detected by tag.
pub static ISSUES_DETECTED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("altscan_issues_total", "Total accessibility issues detected"),
        &["issue"],
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(RUNS_TOTAL.clone()),
        Box::new(RUN_DURATION.clone()),
        Box::new(FETCH_ATTEMPTS.clone()),
        Box::new(IMAGES_AUDITED.clone()),
        Box::new(ISSUES_DETECTED.clone()),
    ]
}
