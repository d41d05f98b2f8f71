pub mod aggregator;
pub mod analyzer;
pub mod auditor;
pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod fetcher;
pub mod metrics;
pub mod orchestrator;
pub mod testing;

pub use aggregator::{aggregate, AuditSummary};
pub use analyzer::{analyze_markup, Analyzer, AuditReport};
pub use auditor::{audit_all, AltValue, ImageCandidate, IssueKind};
pub use config::{
    load_config, load_config_from_str, validate_config, AuditorConfig, Config, ConfigError,
    FetcherConfig, RetryConfig, ServerConfig,
};
pub use error::{AuditError, ErrorKind};
pub use export::CandidateRecord;
pub use extractor::{extract, Extraction, OwnerKind, RawCandidate};
pub use fetcher::{normalize_url, FetchError, FetchedPage, Fetcher, HttpFetcher};
pub use orchestrator::{AuditSession, CompletedRun, RunTicket, SessionError, SessionStatus};
