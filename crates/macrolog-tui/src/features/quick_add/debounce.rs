//! Trailing-edge debounce for the food search.
//!
//! Each keystroke replaces the pending query and pushes the deadline out.
//! The reducer polls on every tick and fires once the input has been quiet
//! for the full delay.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<Pending>,
}

#[derive(Debug, Clone)]
struct Pending {
    query: String,
    deadline: Instant,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replaces any pending query with `query`, due `delay` after `now`.
    pub fn schedule(&mut self, query: String, now: Instant) {
        self.pending = Some(Pending {
            query,
            deadline: now + self.delay,
        });
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Takes the pending query once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref()?.deadline > now {
            return None;
        }
        self.pending.take().map(|pending| pending.query)
    }
}
