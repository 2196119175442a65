//! UI collaborators.
//!
//! The guard only ever talks to these three seams. Hosts implement them over
//! their toolkit; `widgets` holds in-memory versions used by the CLI and tests.

pub mod widgets;

pub use widgets::{Button, ConsoleNotifier, NotificationLog, TextField};

/// Text-valued target that receives the response body.
pub trait OutputField: Send + Sync + 'static {
    fn set_value(&self, value: String);
}

/// The control that triggered the fetch.
pub trait Control: Send + Sync + 'static {
    fn set_enabled(&self, enabled: bool);
}

/// Blocking user-facing notification.
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, message: &str);
}
