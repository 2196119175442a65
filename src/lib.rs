//! Guarded single-shot fetch for UI controls.
//!
//! A button press issues one GET, races it against a deadline, writes the body
//! into an output field on success and always re-enables the button.

pub mod config;
pub mod error;
pub mod guard;
pub mod observability;
pub mod transport;
pub mod ui;

pub use config::GuardConfig;
pub use error::{GuardError, TransportError};
pub use guard::{FetchGuard, FetchHandle, Outcome};
pub use transport::{FetchResponse, Fetcher, HttpFetcher};
