// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deadline bookkeeping for phase-step timers.
//!
//! The scheduler never sleeps on its own; the service loop asks for the next
//! deadline, parks until then, and drains whatever came due. Everything is
//! driven through an injected [`Clock`](bullpen_core::Clock) instant, so
//! tests walk through whole choreography cycles without waiting.

use bullpen_core::{Event, TimerId};
use std::time::{Duration, Instant};

/// Pending timers, unordered; scans are over a handful of entries at most
/// (one per agent mid-step).
#[derive(Debug, Default)]
pub struct Scheduler {
    timers: Vec<(Instant, TimerId)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a timer. Setting an id that is already pending re-arms it at the
    /// new deadline.
    pub fn set_timer(&mut self, id: TimerId, duration: Duration, now: Instant) {
        self.cancel_timer(id.as_str());
        self.timers.push((now + duration, id));
    }

    /// Drop a pending timer. Unknown ids are a no-op.
    pub fn cancel_timer(&mut self, id: &str) {
        self.timers.retain(|(_, pending)| pending.as_str() != id);
    }

    pub fn has_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// The earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().map(|(deadline, _)| *deadline).min()
    }

    /// Remove every timer due at `now` and return its event, earliest first.
    pub fn fired_timers(&mut self, now: Instant) -> Vec<Event> {
        let mut due = Vec::new();
        let mut pending = Vec::with_capacity(self.timers.len());
        for entry in self.timers.drain(..) {
            if entry.0 <= now {
                due.push(entry);
            } else {
                pending.push(entry);
            }
        }
        self.timers = pending;

        due.sort_by_key(|(deadline, _)| *deadline);
        due.into_iter().map(|(_, id)| Event::TimerFired { id }).collect()
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
