//! Keystroke debouncer for suggestion requests
//!
//! Holds a suggestion fetch back until typing pauses. Every keystroke restarts
//! the quiet period, so a burst of typing costs a single request.

use std::time::{Duration, Instant};

/// Quiet period before a suggestion fetch is issued
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    /// Timestamp of the last keystroke that scheduled a fetch
    last_input_time: Option<Instant>,
    pending: bool,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            last_input_time: None,
            pending: false,
        }
    }

    /// Schedule a fetch, restarting the quiet period if one is already pending.
    pub fn schedule(&mut self) {
        self.schedule_at(Instant::now());
    }

    pub fn schedule_at(&mut self, now: Instant) {
        self.last_input_time = Some(now);
        self.pending = true;
    }

    pub fn cancel(&mut self) {
        self.pending = false;
        self.last_input_time = None;
    }

    /// Whether the quiet period has elapsed for the pending fetch
    pub fn is_ready(&self) -> bool {
        self.is_ready_at(Instant::now())
    }

    pub fn is_ready_at(&self, now: Instant) -> bool {
        if !self.pending {
            return false;
        }

        match self.last_input_time {
            Some(last_time) => now.saturating_duration_since(last_time) >= self.delay,
            None => false,
        }
    }

    /// Clear the pending fetch once it has been issued
    pub fn mark_complete(&mut self) {
        self.pending = false;
        self.last_input_time = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
