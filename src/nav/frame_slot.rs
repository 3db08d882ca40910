// SPDX-License-Identifier: MPL-2.0
//! Single-slot deferral to the next animation frame.
//!
//! Requests made between two frames collapse into one: a new request
//! replaces the pending value instead of queueing behind it.

/// Holds at most one value waiting for the next frame.
#[derive(Debug)]
pub struct FrameSlot<T> {
    pending: Option<T>,
}

impl<T> Default for FrameSlot<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> FrameSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `value` for the next frame, dropping any pending value.
    pub fn request(&mut self, value: T) {
        self.pending = Some(value);
    }

    /// Takes the pending value, if any.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drops the pending value.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
