//! Run-level error taxonomy.
//!
//! Markup that the parser has to repair is not an error: recovery is counted
//! on the extraction result and the run proceeds.

use serde::Serialize;
use thiserror::Error;

use crate::fetcher::FetchError;

/// Errors that end an audit run.
#[derive(Debug, Clone, Error)]
pub enum AuditError {
    /// Malformed input URL. Never retried.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Connection failure, timeout or retry exhaustion.
    #[error("network error: {0}")]
    Network(FetchError),

    /// Any other fault during a run.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

/// Coarse failure category reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidUrl,
    Network,
    Unexpected,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidUrl => "invalid_url",
            Self::Network => "network",
            Self::Unexpected => "unexpected",
        }
    }
}

impl AuditError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            Self::Network(_) => ErrorKind::Network,
            Self::Unexpected(_) => ErrorKind::Unexpected,
        }
    }
}

impl From<FetchError> for AuditError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::InvalidUrl { url, reason } => Self::InvalidUrl { url, reason },
            other => Self::Network(other),
        }
    }
}
