// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session identity and lifecycle status.

use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Identifier for a backend work session.
    ///
    /// One session at a time owns the floor; a new session means a fresh
    /// floor. Backend-assigned session ids are kept verbatim, anonymous
    /// sessions (a feed joined mid-stream) get a generated one.
    pub struct SessionId("ses-");
}

/// Lifecycle status of the session that owns the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Active,
    Ended,
}

crate::simple_display! {
    SessionStatus {
        Active => "active",
        Ended => "ended",
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
