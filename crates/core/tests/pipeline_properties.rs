//! Pipeline integration tests.
//!
//! These tests run the extract, audit and aggregate pipeline on fixture pages:
//! - Literal classification of the common alt-text cases
//! - Summary counters partitioning the candidate list
//! - Deduplication and document order
//! - Repeated alt text across a page
//! - Idempotence of the whole pipeline

use std::collections::HashSet;
use std::sync::Arc;

use url::Url;

use altscan_core::{
    analyze_markup,
    testing::{fixtures, MockFetcher},
    AltValue, Analyzer, AuditorConfig, ErrorKind, FetchError, IssueKind, OwnerKind,
};

fn page() -> Url {
    Url::parse("https://example.com/gallery/").unwrap()
}

fn issue_tags(report: &altscan_core::AuditReport, index: usize) -> Vec<&'static str> {
    report.candidates[index]
        .issues
        .iter()
        .map(|issue| issue.as_str())
        .collect()
}

#[test]
fn test_mixed_page_classification() {
    let report = analyze_markup(&page(), &page(), fixtures::MIXED_PAGE, &AuditorConfig::default());

    let srcs: Vec<&str> = report.candidates.iter().map(|c| c.src_url.as_str()).collect();
    assert_eq!(
        srcs,
        vec![
            "https://example.com/img/cat.jpg",
            "https://example.com/img/no-alt.png",
            "https://example.com/img/home.png",
            "https://example.com/img/logo.png",
            "https://example.com/img/hero-wide.webp",
            "https://example.com/img/hero.jpg",
            "https://example.com/img/lazy.jpg",
            "https://example.com/img/bg.png",
        ]
    );

    assert!(issue_tags(&report, 0).is_empty());
    assert_eq!(issue_tags(&report, 1), vec!["missing-alt"]);
    assert_eq!(
        issue_tags(&report, 2),
        vec!["empty-alt", "image-in-link-without-text"]
    );
    assert_eq!(issue_tags(&report, 3), vec!["alt-equals-filename"]);
    assert_eq!(issue_tags(&report, 4), vec!["source-without-own-alt"]);
    assert_eq!(report.candidates[4].owner, OwnerKind::Source);
    assert!(issue_tags(&report, 5).is_empty());
    assert!(issue_tags(&report, 6).is_empty());
    assert!(issue_tags(&report, 7).is_empty());

    // First occurrence of the duplicated cat.jpg keeps its own alt text.
    assert_eq!(
        report.candidates[0].alt,
        AltValue::Text("Cat sitting on a chair".into())
    );
}

#[test]
fn test_summary_partitions_candidates() {
    let report = analyze_markup(&page(), &page(), fixtures::MIXED_PAGE, &AuditorConfig::default());
    let summary = &report.summary;

    assert_eq!(summary.total, report.candidates.len());
    assert_eq!(
        summary.total,
        summary.with_text + summary.absent_attribute + summary.empty_attribute
    );
    assert_eq!(summary.with_text, 5);
    // The <source> and the img without alt.
    assert_eq!(summary.absent_attribute, 2);
    assert_eq!(summary.empty_attribute, 1);
    assert_eq!(summary.in_link_count, 1);
    assert_eq!(summary.with_issues_count, 4);
    assert!(summary.with_issues_count <= summary.total);
}

#[test]
fn test_no_duplicate_url_owner_pairs() {
    let html = r#"
        <picture>
          <source srcset="/a.webp">
          <img src="/a.webp" alt="A">
        </picture>
        <img src="/a.webp" alt="again">
        <img src="https://example.com/a.webp" alt="absolute again">
    "#;
    let report = analyze_markup(&page(), &page(), html, &AuditorConfig::default());

    assert_eq!(report.candidates.len(), 2);
    let pairs: HashSet<(String, OwnerKind)> = report
        .candidates
        .iter()
        .map(|c| (c.src_url.to_string(), c.owner))
        .collect();
    assert_eq!(pairs.len(), report.candidates.len());
    assert_eq!(report.candidates[1].alt, AltValue::Text("A".into()));
}

#[test]
fn test_alt_overused_after_threshold() {
    let html = fixtures::repeated_alt_page(5, "icon");
    let report = analyze_markup(&page(), &page(), &html, &AuditorConfig::default());

    let flagged: Vec<bool> = report
        .candidates
        .iter()
        .map(|c| c.has_issue(IssueKind::AltOverused))
        .collect();
    assert_eq!(flagged, vec![false, false, false, true, true]);
}

#[test]
fn test_overuse_threshold_is_configurable() {
    let html = fixtures::repeated_alt_page(3, "icon");
    let config = AuditorConfig {
        overuse_threshold: 1,
        ..Default::default()
    };
    let report = analyze_markup(&page(), &page(), &html, &config);

    let flagged = report
        .candidates
        .iter()
        .filter(|c| c.has_issue(IssueKind::AltOverused))
        .count();
    assert_eq!(flagged, 2);
}

#[test]
fn test_pipeline_is_idempotent() {
    let config = AuditorConfig::default();
    let first = analyze_markup(&page(), &page(), fixtures::MIXED_PAGE, &config);
    let second = analyze_markup(&page(), &page(), fixtures::MIXED_PAGE, &config);
    assert_eq!(first, second);
}

#[test]
fn test_page_without_images() {
    let report = analyze_markup(
        &page(),
        &page(),
        "<html><body><p>text only</p></body></html>",
        &AuditorConfig::default(),
    );
    assert!(report.candidates.is_empty());
    assert_eq!(report.summary.total, 0);
    assert_eq!(report.summary.with_issues_count, 0);
}

#[test]
fn test_malformed_markup_is_still_audited() {
    let html = r#"<div><p><img src="x.png"><table><img src="y.png" alt="Y"></div"#;
    let report = analyze_markup(&page(), &page(), html, &AuditorConfig::default());

    assert_eq!(report.summary.total, 2);
    assert!(report.candidates[0].has_issue(IssueKind::MissingAlt));
}

#[tokio::test]
async fn test_analyzer_over_mock_fetcher() {
    let fetcher = Arc::new(MockFetcher::new());
    fetcher.set_default_page(fixtures::MIXED_PAGE).await;
    let analyzer = Analyzer::new(fetcher.clone(), AuditorConfig::default());

    let report = analyzer.analyze("example.com/gallery/").await.unwrap();

    assert_eq!(report.summary.source_url.as_str(), "https://example.com/gallery/");
    assert_eq!(report.summary.total, 8);
    let records = report.records();
    assert_eq!(records[1].alt, "absent");
    assert_eq!(records[2].alt, "");
    assert_eq!(records[4].element, "source");
}

#[tokio::test]
async fn test_analyzer_reports_fetch_failure_kind() {
    let fetcher = Arc::new(MockFetcher::new());
    fetcher
        .set_persistent_error(Some(FetchError::Timeout { timeout_secs: 12 }))
        .await;
    let analyzer = Analyzer::new(fetcher, AuditorConfig::default());

    let err = analyzer.analyze("https://example.com/").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);

    let err = analyzer.analyze("http://").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidUrl);
}
