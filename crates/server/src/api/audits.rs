//! Audit session API handlers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use altscan_core::{
    AuditSummary, CandidateRecord, CompletedRun, ErrorKind, RunTicket, SessionError,
    SessionStatus,
};

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for starting an audit
#[derive(Debug, Deserialize)]
pub struct StartAuditBody {
    /// Page to audit; `https://` is assumed when no scheme is given
    pub url: String,
}

/// Successful run with its report
#[derive(Debug, Serialize)]
pub struct AuditResultResponse {
    #[serde(flatten)]
    pub run: RunTicket,
    pub finished_at: String,
    pub summary: AuditSummary,
    pub images: Vec<CandidateRecord>,
}

/// Failed run
#[derive(Debug, Serialize)]
pub struct AuditFailureResponse {
    #[serde(flatten)]
    pub run: RunTicket,
    pub finished_at: String,
    pub kind: ErrorKind,
    pub message: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct AuditErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
}

impl AuditErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            run_id: None,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Start an audit run in the background
pub async fn start_audit(
    State(state): State<Arc<AppState>>,
    Json(body): Json<StartAuditBody>,
) -> Result<(StatusCode, Json<RunTicket>), impl IntoResponse> {
    match state.session().start(body.url).await {
        Ok(ticket) => Ok((StatusCode::ACCEPTED, Json(ticket))),
        Err(e) => {
            let SessionError::RunInProgress { run_id } = &e;
            Err((
                StatusCode::CONFLICT,
                Json(AuditErrorResponse {
                    error: e.to_string(),
                    run_id: Some(run_id.to_string()),
                }),
            ))
        }
    }
}

/// Get the session status
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<SessionStatus> {
    Json(state.session().status().await)
}

/// Take the result of the finished run
pub async fn get_result(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    if let Some(run) = state.session().take_result().await {
        return completed_response(run);
    }

    match state.session().status().await {
        SessionStatus::Running(ticket) => (
            StatusCode::CONFLICT,
            Json(AuditErrorResponse {
                error: "audit run still in progress".to_string(),
                run_id: Some(ticket.run_id.to_string()),
            }),
        )
            .into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(AuditErrorResponse::new("no audit result available")),
        )
            .into_response(),
    }
}

fn completed_response(run: CompletedRun) -> axum::response::Response {
    let finished_at = run.finished_at.to_rfc3339();
    match run.outcome {
        Ok(report) => {
            info!(run_id = %run.ticket.run_id, "Delivering audit report");
            let images = report.records();
            (
                StatusCode::OK,
                Json(AuditResultResponse {
                    run: run.ticket,
                    finished_at,
                    summary: report.summary,
                    images,
                }),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(AuditFailureResponse {
                run: run.ticket,
                finished_at,
                kind: e.kind(),
                message: e.to_string(),
            }),
        )
            .into_response(),
    }
}
