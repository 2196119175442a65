//! Guarded fetch subsystem.
//!
//! # Data Flow
//! ```text
//! button press
//!     → FetchGuard::run(address)
//!         → InteractionLock::acquire (control disabled)
//!         → Fetcher::fetch(address)          ─┐
//!         → tokio::time::sleep(deadline)     ─┴─ select!, first wins
//!     → Interaction::complete | Interaction::expire
//!         → output written (200 only) / notification (timeout only)
//!         → InteractionLock::release (control enabled, exactly once)
//! ```
//!
//! # Design Decisions
//! - One spawned task per interaction; `run` never blocks
//! - Losing side of the race is dropped, which aborts the request or cancels the timer
//! - Every transition leaves `Pending` by compare-and-swap, so late signals are no-ops
//! - Failures stay silent in the UI; only a timeout is surfaced

pub mod fetch_guard;
pub mod interaction;
pub mod lock;
pub mod state;

pub use fetch_guard::{FetchGuard, FetchHandle};
pub use interaction::Interaction;
pub use lock::InteractionLock;
pub use state::{GuardState, Outcome, RequestState, TimerState};
