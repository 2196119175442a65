//! One invocation of the guard.
//!
//! An `Interaction` owns the request, the deadline and a handle to the lock
//! for exactly one button press. `complete` and `expire` are the only two
//! resolution signals; whichever moves the state out of `Pending` first wins,
//! and every later signal is discarded without touching the UI.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, OnceLock};

use tokio::time::Instant;
use uuid::Uuid;

use crate::error::{GuardError, TransportError};
use crate::guard::lock::InteractionLock;
use crate::guard::state::{GuardState, Outcome, RequestState, TimerState};
use crate::observability::metrics;
use crate::transport::FetchResponse;
use crate::ui::{Notifier, OutputField};

pub struct Interaction {
    id: Uuid,
    address: String,
    state: AtomicU8,
    request: AtomicU8,
    timer: AtomicU8,
    outcome: OnceLock<Outcome>,
    lock: Arc<InteractionLock>,
    output: Arc<dyn OutputField>,
    notifier: Arc<dyn Notifier>,
    timeout_message: String,
    metrics_enabled: bool,
    started: Instant,
}

impl Interaction {
    pub(crate) fn new(
        address: &str,
        lock: Arc<InteractionLock>,
        output: Arc<dyn OutputField>,
        notifier: Arc<dyn Notifier>,
        timeout_message: String,
        metrics_enabled: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            address: address.to_string(),
            state: AtomicU8::new(GuardState::Idle as u8),
            request: AtomicU8::new(RequestState::Pending as u8),
            timer: AtomicU8::new(TimerState::Armed as u8),
            outcome: OnceLock::new(),
            lock,
            output,
            notifier,
            timeout_message,
            metrics_enabled,
            started: Instant::now(),
        }
    }

    /// Idle → Pending. Disables the control; fails if another interaction holds it.
    pub(crate) fn start(&self) -> Result<(), GuardError> {
        if !self.lock.acquire() {
            return Err(GuardError::Busy);
        }
        self.state.store(GuardState::Pending as u8, Ordering::Release);
        tracing::debug!(interaction_id = %self.id, address = %self.address, "interaction started");
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn state(&self) -> GuardState {
        GuardState::from(self.state.load(Ordering::Acquire))
    }

    pub fn request_state(&self) -> RequestState {
        RequestState::from(self.request.load(Ordering::Acquire))
    }

    pub fn timer_state(&self) -> TimerState {
        TimerState::from(self.timer.load(Ordering::Acquire))
    }

    /// Terminal value, once resolved.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome.get().cloned()
    }

    /// The request finished: a response arrived or the transport failed.
    ///
    /// Returns `None` when the interaction had already resolved.
    pub fn complete(&self, result: Result<FetchResponse, TransportError>) -> Option<Outcome> {
        let outcome = match &result {
            Ok(response) if response.is_ok() => Outcome::Succeeded,
            Ok(response) => Outcome::Failed { status: Some(response.status) },
            Err(_) => Outcome::Failed { status: None },
        };
        if !self.resolve(&outcome) {
            self.discard("completion");
            return None;
        }

        self.request.store(RequestState::Completed as u8, Ordering::Release);
        let _ = self.timer.compare_exchange(
            TimerState::Armed as u8,
            TimerState::Cancelled as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        );

        match result {
            Ok(response) if response.is_ok() => {
                tracing::info!(
                    interaction_id = %self.id,
                    bytes = response.body.len(),
                    elapsed_ms = self.started.elapsed().as_millis() as u64,
                    "response received"
                );
                self.output.set_value(response.body);
            }
            Ok(response) => {
                tracing::debug!(interaction_id = %self.id, status = response.status, "non-200 response, output left unchanged");
            }
            Err(e) => {
                tracing::debug!(interaction_id = %self.id, error = %e, "transport failure, output left unchanged");
            }
        }

        self.lock.release();
        self.finish(outcome)
    }

    /// The deadline fired before the request finished.
    ///
    /// Returns `None` when the interaction had already resolved.
    pub fn expire(&self) -> Option<Outcome> {
        let outcome = Outcome::TimedOut;
        if !self.resolve(&outcome) {
            self.discard("expiry");
            return None;
        }

        self.timer.store(TimerState::Fired as u8, Ordering::Release);
        self.request.store(RequestState::Aborted as u8, Ordering::Release);
        tracing::warn!(
            interaction_id = %self.id,
            address = %self.address,
            elapsed_ms = self.started.elapsed().as_millis() as u64,
            "deadline expired, request aborted"
        );

        self.notifier.notify(&self.timeout_message);
        self.lock.release();
        self.finish(outcome)
    }

    /// The driver went away before either signal: runtime shutdown or abort.
    ///
    /// Resolves as a silent failure so the control is not left disabled.
    /// Returns `None` when the interaction had already resolved.
    pub fn abandon(&self) -> Option<Outcome> {
        let outcome = Outcome::Failed { status: None };
        if !self.resolve(&outcome) {
            return None;
        }

        self.request.store(RequestState::Aborted as u8, Ordering::Release);
        let _ = self.timer.compare_exchange(
            TimerState::Armed as u8,
            TimerState::Cancelled as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
        tracing::warn!(interaction_id = %self.id, address = %self.address, "driver dropped, interaction abandoned");

        self.lock.release();
        self.finish(outcome)
    }

    /// Pending → terminal. Only one caller ever gets `true`.
    fn resolve(&self, outcome: &Outcome) -> bool {
        let won = self
            .state
            .compare_exchange(
                GuardState::Pending as u8,
                outcome.state() as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok();
        if won {
            let _ = self.outcome.set(outcome.clone());
        }
        won
    }

    fn discard(&self, signal: &'static str) {
        tracing::trace!(interaction_id = %self.id, signal, state = ?self.state(), "late signal discarded");
        if self.metrics_enabled {
            metrics::record_late_completion();
        }
    }

    fn finish(&self, outcome: Outcome) -> Option<Outcome> {
        if self.metrics_enabled {
            metrics::record_outcome(&outcome, self.started.elapsed());
        }
        Some(outcome)
    }
}

impl fmt::Debug for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interaction")
            .field("id", &self.id)
            .field("address", &self.address)
            .field("state", &self.state())
            .field("request", &self.request_state())
            .field("timer", &self.timer_state())
            .finish()
    }
}
