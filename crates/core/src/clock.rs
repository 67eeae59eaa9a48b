// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable time handling.
//!
//! Choreography is all timers, so every duration-sensitive component takes a
//! [`Clock`] instead of calling `Instant::now()` directly. Tests drive a
//! [`FakeClock`] through whole walk/chat/ride cycles without sleeping.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// A clock that provides the current time.
///
/// `now()` is monotonic (deadline math); `epoch_ms()` is wall-clock
/// (record timestamps).
pub trait Clock: Clone + Send + Sync {
    fn now(&self) -> Instant;
    fn epoch_ms(&self) -> u64;
}

/// Real system clock
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn epoch_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

#[derive(Debug)]
struct FakeNow {
    instant: Instant,
    epoch_ms: u64,
}

/// Fake clock for testing with controllable time.
///
/// `advance` moves both the monotonic and wall-clock views together, so a
/// timer deadline and the timestamp it stamps on a record stay coherent.
#[derive(Clone)]
pub struct FakeClock {
    now: Arc<Mutex<FakeNow>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(FakeNow { instant: Instant::now(), epoch_ms: 1_000_000 })),
        }
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        let mut now = self.now.lock();
        now.instant += duration;
        now.epoch_ms += duration.as_millis() as u64;
    }

    /// Set the monotonic clock to a specific instant
    pub fn set(&self, instant: Instant) {
        self.now.lock().instant = instant;
    }

    /// Set the epoch milliseconds value
    pub fn set_epoch_ms(&self, ms: u64) {
        self.now.lock().epoch_ms = ms;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.now.lock().instant
    }

    fn epoch_ms(&self) -> u64 {
        self.now.lock().epoch_ms
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
