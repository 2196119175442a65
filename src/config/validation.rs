//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0)
//! - Reject empty user-facing strings
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GuardConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::GuardConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &GuardConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.deadline.timeout_ms == 0 {
        errors.push(ValidationError::ZeroDuration { field: "deadline.timeout_ms" });
    }
    if config.http.connect_timeout_ms == 0 {
        errors.push(ValidationError::ZeroDuration { field: "http.connect_timeout_ms" });
    }
    if config.http.user_agent.trim().is_empty() {
        errors.push(ValidationError::Empty { field: "http.user_agent" });
    }
    if config.notification.timeout_message.trim().is_empty() {
        errors.push(ValidationError::Empty { field: "notification.timeout_message" });
    }
    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
