//! Interaction state machines.
//!
//! # States
//! ```text
//! GuardState:   Idle → Pending → Succeeded | Failed | TimedOut
//! RequestState: Pending → Completed | Aborted
//! TimerState:   Armed → Fired | Cancelled
//! ```
//!
//! Terminal states have no outgoing transitions. Each state is stored as a
//! `u8` inside an atomic so transitions are a single compare-and-swap.

use serde::Serialize;

/// Lifecycle of one interaction.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardState {
    Idle = 0,
    Pending = 1,
    Succeeded = 2,
    Failed = 3,
    TimedOut = 4,
}

impl GuardState {
    pub fn is_terminal(self) -> bool {
        matches!(self, GuardState::Succeeded | GuardState::Failed | GuardState::TimedOut)
    }
}

impl From<u8> for GuardState {
    fn from(val: u8) -> Self {
        match val {
            1 => GuardState::Pending,
            2 => GuardState::Succeeded,
            3 => GuardState::Failed,
            4 => GuardState::TimedOut,
            _ => GuardState::Idle,
        }
    }
}

/// Lifecycle of the network request.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestState {
    Pending = 0,
    Completed = 1,
    Aborted = 2,
}

impl From<u8> for RequestState {
    fn from(val: u8) -> Self {
        match val {
            1 => RequestState::Completed,
            2 => RequestState::Aborted,
            _ => RequestState::Pending,
        }
    }
}

/// Lifecycle of the deadline timer.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerState {
    Armed = 0,
    Fired = 1,
    Cancelled = 2,
}

impl From<u8> for TimerState {
    fn from(val: u8) -> Self {
        match val {
            1 => TimerState::Fired,
            2 => TimerState::Cancelled,
            _ => TimerState::Armed,
        }
    }
}

/// How an interaction resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Status 200; the body was written to the output field.
    Succeeded,
    /// Non-200 status (`Some`) or transport failure (`None`); output untouched.
    Failed { status: Option<u16> },
    /// Deadline expired first; the request was aborted.
    TimedOut,
}

impl Outcome {
    /// Stable label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Succeeded => "succeeded",
            Outcome::Failed { .. } => "failed",
            Outcome::TimedOut => "timed_out",
        }
    }

    pub fn state(&self) -> GuardState {
        match self {
            Outcome::Succeeded => GuardState::Succeeded,
            Outcome::Failed { .. } => GuardState::Failed,
            Outcome::TimedOut => GuardState::TimedOut,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_u8() {
        for state in [
            GuardState::Idle,
            GuardState::Pending,
            GuardState::Succeeded,
            GuardState::Failed,
            GuardState::TimedOut,
        ] {
            assert_eq!(GuardState::from(state as u8), state);
        }
    }

    #[test]
    fn test_terminal_states() {
        assert!(!GuardState::Idle.is_terminal());
        assert!(!GuardState::Pending.is_terminal());
        assert!(GuardState::Succeeded.is_terminal());
        assert!(GuardState::Failed.is_terminal());
        assert!(GuardState::TimedOut.is_terminal());
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(Outcome::Failed { status: Some(404) }).unwrap();
        assert_eq!(json, serde_json::json!({ "outcome": "failed", "status": 404 }));
        assert_eq!(Outcome::TimedOut.label(), "timed_out");
    }
}
