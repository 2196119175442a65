//! Metrics collection.
//!
//! # Metrics
//! - `fetch_guard_outcomes_total` (counter): terminal transitions by outcome
//! - `fetch_guard_late_completions_total` (counter): signals discarded after resolution
//! - `fetch_guard_duration_seconds` (histogram): time from invocation to resolution

use std::time::Duration;

use crate::guard::Outcome;

pub const OUTCOMES_TOTAL: &str = "fetch_guard_outcomes_total";
pub const LATE_COMPLETIONS_TOTAL: &str = "fetch_guard_late_completions_total";
pub const DURATION_SECONDS: &str = "fetch_guard_duration_seconds";

/// Record one terminal transition.
pub fn record_outcome(outcome: &Outcome, elapsed: Duration) {
    metrics::counter!(OUTCOMES_TOTAL, "outcome" => outcome.label()).increment(1);
    metrics::histogram!(DURATION_SECONDS, "outcome" => outcome.label()).record(elapsed.as_secs_f64());
}

/// Record a completion or expiry that arrived after the interaction resolved.
pub fn record_late_completion() {
    metrics::counter!(LATE_COMPLETIONS_TOTAL).increment(1);
}
