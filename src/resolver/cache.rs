//! Write-once resolution cache.

use std::sync::OnceLock;

/// A single slot holding either "empty" or one immutable value.
///
/// The state machine is one-way: `Empty -> Resolved`, no transition back.
/// The publish is a conditional set, not a lock around the computation, so
/// concurrent writers race and exactly one value is durably published.
#[derive(Debug)]
pub struct OnceSlot<T> {
    slot: OnceLock<T>,
}

impl<T> OnceSlot<T> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Non-blocking read of the current value.
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Publish `value` only if the slot is currently empty.
    ///
    /// Returns whether this caller's value became the published one.
    pub fn try_set(&self, value: T) -> bool {
        self.slot.set(value).is_ok()
    }

    /// Publish `value` if the slot is empty, then return the published
    /// value: the winner's, which may not be `value`.
    pub fn get_or_publish(&self, value: T) -> &T {
        self.slot.get_or_init(|| value)
    }
}

impl<T> Default for OnceSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
