//! Types for the audit session.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::analyzer::AuditReport;
use crate::error::AuditError;

/// Errors returned to the caller of a session.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// A run is still executing; the new request was rejected, not queued.
    #[error("an audit run is already in progress: {run_id}")]
    RunInProgress { run_id: Uuid },
}

/// Identifies an accepted run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunTicket {
    pub run_id: Uuid,
    /// URL as requested by the caller.
    pub url: String,
    pub started_at: DateTime<Utc>,
}

/// What the session is doing right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionStatus {
    /// No run, or the last result has been read.
    Idle,
    /// A run is executing.
    Running(RunTicket),
    /// A run has finished and its result has not been read yet.
    Finished(RunTicket),
}

impl SessionStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running(_))
    }
}

/// A finished run handed to the caller.
#[derive(Debug)]
pub struct CompletedRun {
    pub ticket: RunTicket,
    pub finished_at: DateTime<Utc>,
    /// Either the full report or the single failure; never a partial report.
    pub outcome: Result<AuditReport, AuditError>,
}

impl CompletedRun {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        let ticket = RunTicket {
            run_id: Uuid::nil(),
            url: "example.com".to_string(),
            started_at: Utc::now(),
        };

        let idle = serde_json::to_value(SessionStatus::Idle).unwrap();
        assert_eq!(idle["state"], "idle");

        let running = serde_json::to_value(SessionStatus::Running(ticket)).unwrap();
        assert_eq!(running["state"], "running");
        assert_eq!(running["url"], "example.com");
        assert_eq!(running["run_id"], "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn test_error_display() {
        let err = SessionError::RunInProgress {
            run_id: Uuid::nil(),
        };
        assert_eq!(
            err.to_string(),
            "an audit run is already in progress: 00000000-0000-0000-0000-000000000000"
        );
    }
}
