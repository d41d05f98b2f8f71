use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Fetcher timeout and user agent are usable
/// - Retry delays grow and stay below their cap
/// - Auditor thresholds are positive
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(invalid("server.port cannot be 0"));
    }

    let fetcher = &config.fetcher;
    if fetcher.timeout_secs == 0 {
        return Err(invalid("fetcher.timeout_secs cannot be 0"));
    }
    if fetcher.user_agent.trim().is_empty() {
        return Err(invalid("fetcher.user_agent cannot be empty"));
    }

    let retry = &fetcher.retry;
    if retry.backoff_multiplier < 1.0 {
        return Err(invalid("fetcher.retry.backoff_multiplier must be >= 1.0"));
    }
    if retry.max_delay_ms < retry.initial_delay_ms {
        return Err(invalid(
            "fetcher.retry.max_delay_ms must be >= fetcher.retry.initial_delay_ms",
        ));
    }

    if config.auditor.max_alt_length == 0 {
        return Err(invalid("auditor.max_alt_length cannot be 0"));
    }
    if config.auditor.overuse_threshold == 0 {
        return Err(invalid("auditor.overuse_threshold cannot be 0"));
    }

    Ok(())
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::ValidationError(message.to_string())
}
