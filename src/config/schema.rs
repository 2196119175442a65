//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.
//! Every section has defaults, so an empty file yields `GuardConfig::default()`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for a fetch guard.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GuardConfig {
    /// Deadline applied to each interaction.
    pub deadline: DeadlineConfig,

    /// HTTP client settings.
    pub http: HttpConfig,

    /// User-facing notification text.
    pub notification: NotificationConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl GuardConfig {
    /// Deadline as a `Duration`.
    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline.timeout_ms)
    }
}

/// Deadline configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DeadlineConfig {
    /// Maximum wait for a response, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for DeadlineConfig {
    fn default() -> Self {
        Self { timeout_ms: 30_000 }
    }
}

/// HTTP client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// `User-Agent` header sent with every request.
    pub user_agent: String,

    /// Connection establishment timeout in milliseconds.
    pub connect_timeout_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("fetch-guard/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout_ms: 10_000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Message shown once when the deadline expires.
    pub timeout_message: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            timeout_message: "Request timed out".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Record outcome metrics through the `metrics` facade.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
        }
    }
}
