//! In-memory widgets.
//!
//! Each widget counts its mutations so callers can assert on how often the
//! guard touched it, not only on the final value.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::ui::{Control, Notifier, OutputField};

/// A single-line text field.
#[derive(Debug, Default)]
pub struct TextField {
    value: Mutex<String>,
    writes: AtomicUsize,
}

impl TextField {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(initial.into()),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn value(&self) -> String {
        self.value.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Number of times the value was written.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl OutputField for TextField {
    fn set_value(&self, value: String) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = value;
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

/// A push button that can be enabled or disabled.
#[derive(Debug)]
pub struct Button {
    enabled: AtomicBool,
    enables: AtomicUsize,
    disables: AtomicUsize,
}

impl Button {
    pub fn new() -> Self {
        Self {
            enabled: AtomicBool::new(true),
            enables: AtomicUsize::new(0),
            disables: AtomicUsize::new(0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Number of enable calls received.
    pub fn enables(&self) -> usize {
        self.enables.load(Ordering::SeqCst)
    }

    /// Number of disable calls received.
    pub fn disables(&self) -> usize {
        self.disables.load(Ordering::SeqCst)
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

impl Control for Button {
    fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
        let counter = if enabled { &self.enables } else { &self.disables };
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

/// Records notifications instead of showing them.
#[derive(Debug, Default)]
pub struct NotificationLog {
    messages: Mutex<Vec<String>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

/// Prints notifications to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}
