//! The fetch, extract, audit, aggregate pipeline.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};
use url::Url;

use crate::aggregator::{aggregate, AuditSummary};
use crate::auditor::{audit_all, ImageCandidate};
use crate::config::{AuditorConfig, Config};
use crate::error::AuditError;
use crate::export::CandidateRecord;
use crate::extractor::extract;
use crate::fetcher::{normalize_url, Fetcher, HttpFetcher};

/// Result of one analysis: summary plus candidates in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub summary: AuditSummary,
    pub candidates: Vec<ImageCandidate>,
}

impl AuditReport {
    /// Flat rows for report writers.
    pub fn records(&self) -> Vec<CandidateRecord> {
        self.candidates.iter().map(CandidateRecord::from).collect()
    }
}

/// Runs the whole pipeline for one URL.
pub struct Analyzer {
    fetcher: Arc<dyn Fetcher>,
    config: AuditorConfig,
}

impl Analyzer {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: AuditorConfig) -> Self {
        Self { fetcher, config }
    }

    /// Build an analyzer backed by `HttpFetcher`.
    pub fn from_config(config: &Config) -> Result<Self, AuditError> {
        let fetcher = HttpFetcher::new(&config.fetcher)
            .map_err(|e| AuditError::Unexpected(e.to_string()))?;
        Ok(Self::new(Arc::new(fetcher), config.auditor.clone()))
    }

    /// Fetch `url` and audit its images.
    pub async fn analyze(&self, url: &str) -> Result<AuditReport, AuditError> {
        let page_url = normalize_url(url)?;
        let page = self.fetcher.fetch(&page_url).await?;
        debug!(
            url = %page_url,
            final_url = %page.final_url,
            attempts = page.attempts,
            "Page retrieved"
        );

        let report = analyze_markup(&page_url, &page.final_url, &page.body, &self.config);
        info!(
            url = %page_url,
            images = report.summary.total,
            with_issues = report.summary.with_issues_count,
            "Page analyzed"
        );
        Ok(report)
    }
}

/// Extract, audit and aggregate already-fetched markup.
///
/// `page_url` is echoed in the report; `fetched_url` (the post-redirect URL)
/// is the default base for relative references.
pub fn analyze_markup(
    page_url: &Url,
    fetched_url: &Url,
    html: &str,
    config: &AuditorConfig,
) -> AuditReport {
    let extraction = extract(html, fetched_url);
    let candidates = audit_all(page_url, extraction.candidates, config);
    let summary = aggregate(page_url, &candidates);
    AuditReport {
        summary,
        candidates,
    }
}
