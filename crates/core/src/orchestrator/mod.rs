//! Background orchestration of audit runs.
//!
//! The session drives one Fetcher, Extractor, Auditor, Aggregator pass per run
//! on a worker task and hands the finished result to a single consumer:
//! - **Single-flight**: a start request while a run executes is rejected
//! - **No cancellation**: a started run always finishes
//! - **Polling**: callers check `is_running` and then `take_result`

mod session;
mod types;

pub use session::AuditSession;
pub use types::{CompletedRun, RunTicket, SessionError, SessionStatus};
