//! Deadline-based debounce owned by its caller.
//!
//! There are no threads or detached timers: the owner stores a [`Debouncer`], schedules values
//! into it, and the event loop calls [`Debouncer::poll`] with the current time. Dropping the
//! owner drops the pending value with it.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Holds at most one pending value that becomes ready once `delay` has passed without a
/// newer value being scheduled.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value`, replacing any pending one and restarting the quiet period
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending { value, deadline: now + self.delay });
    }

    /// Drop the pending value. Returns whether something was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Time left until the pending value fires, zero if already due
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline().map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Take the pending value if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }
}
