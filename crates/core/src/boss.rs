// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Boss presence states.
//!
//! The boss is a permanent fixture, not a floor agent: it never queues,
//! never holds a desk slot, and is never removed. Its exposed state is
//! derived by the engine from the floor plus the boss's own reports.

use serde::{Deserialize, Serialize};

/// What the boss figure is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BossState {
    /// Nothing to show
    Idle,
    /// An agent's arrival is in flight
    Delegating,
    /// An agent is reporting at the boss's desk
    Reviewing,
    /// The orchestrating session is working
    Working,
    /// The orchestrating session is blocked on a permission prompt
    WaitingPermission,
    /// The orchestrating session reported completion
    Completing,
}

crate::simple_display! {
    BossState {
        Idle => "idle",
        Delegating => "delegating",
        Reviewing => "reviewing",
        Working => "working",
        WaitingPermission => "waiting_permission",
        Completing => "completing",
    }
}
