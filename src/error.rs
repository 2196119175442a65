//! Error types shared across the crate.
//!
//! # Design Decisions
//! - Transport failures never reach the UI; they are folded into `Outcome::Failed`
//! - `GuardError` covers the guard's own contract, not the network

use thiserror::Error;

/// Failure reported by a [`Fetcher`](crate::transport::Fetcher) before a status was observed.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Errors returned by [`FetchGuard`](crate::guard::FetchGuard).
#[derive(Debug, Error)]
pub enum GuardError {
    /// The control is still disabled by an unresolved interaction.
    #[error("an interaction is already in flight")]
    Busy,

    /// The task driving the interaction panicked or was cancelled by the runtime.
    #[error("interaction task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// `run` was called outside a tokio runtime.
    #[error("no tokio runtime to drive the interaction")]
    NoRuntime,

    /// The driver finished but no terminal outcome was recorded.
    #[error("interaction ended without resolving")]
    Unresolved,
}
