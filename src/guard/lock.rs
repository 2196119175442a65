//! Interaction lock over the triggering control.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::ui::Control;

/// Explicit form of the control's `disabled` flag.
///
/// Disabling and re-enabling are each a compare-and-swap, so the control sees
/// exactly one disable and one enable per interaction no matter how many
/// resolution signals arrive.
pub struct InteractionLock {
    control: Arc<dyn Control>,
    held: AtomicBool,
}

impl InteractionLock {
    pub fn new(control: Arc<dyn Control>) -> Self {
        Self {
            control,
            held: AtomicBool::new(false),
        }
    }

    /// Disable the control. Returns false if it was already disabled by us.
    pub fn acquire(&self) -> bool {
        if self
            .held
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        self.control.set_enabled(false);
        true
    }

    /// Re-enable the control. Returns false if it was not held.
    pub fn release(&self) -> bool {
        if self
            .held
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        self.control.set_enabled(true);
        true
    }

    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }
}

impl fmt::Debug for InteractionLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionLock")
            .field("held", &self.is_held())
            .finish()
    }
}
