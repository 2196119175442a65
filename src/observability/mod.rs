//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Interaction transitions produce:
//!     → tracing events inside a per-interaction `fetch` span
//!     → metrics.rs (outcome counters, duration histogram)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr)
//!     → any `metrics` recorder the host installs
//! ```
//!
//! # Design Decisions
//! - UI stays silent on failure; logs and metrics are the only failure channel
//! - Interaction ID flows through every event of one interaction
//! - Metrics are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
