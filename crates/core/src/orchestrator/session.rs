//! Single-flight background execution of audit runs.
//!
//! One run at a time executes on a tokio task. The task's return value is the
//! only thing it shares with the caller: it is written once when the task
//! ends and read once through `take_result`.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::analyzer::{Analyzer, AuditReport};
use crate::error::AuditError;
use crate::metrics::{RUNS_TOTAL, RUN_DURATION};

use super::types::{CompletedRun, RunTicket, SessionError, SessionStatus};

struct WorkerOutput {
    finished_at: DateTime<Utc>,
    outcome: Result<AuditReport, AuditError>,
}

struct ActiveRun {
    ticket: RunTicket,
    handle: JoinHandle<WorkerOutput>,
}

/// An audit session: at most one run in flight, results read by polling.
///
/// Runs cannot be cancelled. Dropping the session detaches a live worker
/// rather than aborting it.
pub struct AuditSession {
    analyzer: Arc<Analyzer>,
    // Caller-side bookkeeping only; the worker never touches it.
    slot: Mutex<Option<ActiveRun>>,
}

impl AuditSession {
    pub fn new(analyzer: Arc<Analyzer>) -> Self {
        Self {
            analyzer,
            slot: Mutex::new(None),
        }
    }

    /// Start auditing `url` in the background.
    ///
    /// Rejected while another run is executing. A finished run whose result
    /// was never read is discarded.
    pub async fn start(&self, url: impl Into<String>) -> Result<RunTicket, SessionError> {
        let mut slot = self.slot.lock().await;

        if let Some(active) = slot.as_ref() {
            if !active.handle.is_finished() {
                return Err(SessionError::RunInProgress {
                    run_id: active.ticket.run_id,
                });
            }
        }
        if let Some(previous) = slot.take() {
            let discarded = join_run(previous).await;
            warn!(
                run_id = %discarded.ticket.run_id,
                success = discarded.is_success(),
                "Discarding unread result of previous run"
            );
        }

        let ticket = RunTicket {
            run_id: Uuid::new_v4(),
            url: url.into(),
            started_at: Utc::now(),
        };

        let span = info_span!("audit_run", run_id = %ticket.run_id, url = %ticket.url);
        let handle = tokio::spawn(
            execute(Arc::clone(&self.analyzer), ticket.url.clone()).instrument(span),
        );

        info!(run_id = %ticket.run_id, url = %ticket.url, "Audit run started");
        *slot = Some(ActiveRun {
            ticket: ticket.clone(),
            handle,
        });

        Ok(ticket)
    }

    /// Liveness flag: true while a run is executing.
    pub async fn is_running(&self) -> bool {
        self.status().await.is_running()
    }

    pub async fn status(&self) -> SessionStatus {
        let slot = self.slot.lock().await;
        match slot.as_ref() {
            None => SessionStatus::Idle,
            Some(active) if active.handle.is_finished() => {
                SessionStatus::Finished(active.ticket.clone())
            }
            Some(active) => SessionStatus::Running(active.ticket.clone()),
        }
    }

    /// Take the result of the finished run.
    ///
    /// Returns `None` while idle or while the run is still executing. Each
    /// run's result is returned exactly once.
    pub async fn take_result(&self) -> Option<CompletedRun> {
        let mut slot = self.slot.lock().await;
        if !slot.as_ref()?.handle.is_finished() {
            return None;
        }
        let active = slot.take()?;
        Some(join_run(active).await)
    }
}

/// Join a finished worker. A panicked worker becomes an `Unexpected` failure
/// and is counted here.
async fn join_run(active: ActiveRun) -> CompletedRun {
    let ActiveRun { ticket, handle } = active;

    let (finished_at, outcome) = match handle.await {
        Ok(output) => (output.finished_at, output.outcome),
        Err(e) => {
            warn!(run_id = %ticket.run_id, error = %e, "Audit worker terminated abnormally");
            RUNS_TOTAL.with_label_values(&["unexpected"]).inc();
            (
                Utc::now(),
                Err(AuditError::Unexpected(format!("audit worker failed: {}", e))),
            )
        }
    };

    CompletedRun {
        ticket,
        finished_at,
        outcome,
    }
}

async fn execute(analyzer: Arc<Analyzer>, url: String) -> WorkerOutput {
    let started = Instant::now();
    let outcome = analyzer.analyze(&url).await;
    let elapsed = started.elapsed().as_secs_f64();

    let result = match &outcome {
        Ok(report) => {
            info!(
                images = report.summary.total,
                with_issues = report.summary.with_issues_count,
                elapsed_secs = elapsed,
                "Audit run completed"
            );
            "success"
        }
        Err(e) => {
            warn!(kind = e.kind().as_str(), error = %e, "Audit run failed");
            e.kind().as_str()
        }
    };
    RUNS_TOTAL.with_label_values(&[result]).inc();
    RUN_DURATION.with_label_values(&[result]).observe(elapsed);

    WorkerOutput {
        finished_at: Utc::now(),
        outcome,
    }
}
