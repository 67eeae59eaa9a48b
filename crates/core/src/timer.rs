// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timer identifier type for tracking scheduled timers.
//!
//! A phase-step timer id encodes the agent it belongs to and the phase epoch
//! it was armed under: `phase:<agent>:<epoch>`. When the timer fires, the
//! engine parses the id back and drops it if the agent's epoch has moved on.
//! A transition that happened in the meantime makes the timer stale, and a
//! stale timer must be a no-op, never a double-advance.

use crate::agent::AgentId;

crate::define_id! {
    /// Unique identifier for a timer instance.
    pub struct TimerId;
}

impl TimerId {
    /// Timer id for an agent's current phase step.
    pub fn phase_step(agent: &AgentId, epoch: u64) -> Self {
        TimerId::new(format!("phase:{agent}:{epoch}"))
    }

    /// Parse a phase-step timer id back into `(agent, epoch)`.
    ///
    /// Returns `None` for ids that are not phase-step timers. Agent ids may
    /// themselves contain `:`; only the trailing segment is the epoch.
    pub fn as_phase_step(&self) -> Option<(AgentId, u64)> {
        let rest = self.as_str().strip_prefix("phase:")?;
        let (agent, epoch_str) = rest.rsplit_once(':')?;
        let epoch = epoch_str.parse().ok()?;
        Some((AgentId::from_string(agent), epoch))
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
