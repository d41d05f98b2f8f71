use std::sync::Arc;

use altscan_core::{Analyzer, AuditSession, Config};

/// Shared application state
pub struct AppState {
    config: Config,
    session: AuditSession,
}

impl AppState {
    pub fn new(config: Config, analyzer: Arc<Analyzer>) -> Self {
        Self {
            config,
            session: AuditSession::new(analyzer),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &AuditSession {
        &self.session
    }
}
