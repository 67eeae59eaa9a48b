// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only office snapshot published to the presentational layer.

use bullpen_core::{AgentId, BackendState, BossState, Phase, QueueFamily, SessionId, SessionStatus};
use serde::{Deserialize, Serialize};

/// The whole floor at one instant. Agents are sorted by `number`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OfficeSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_status: Option<SessionStatus>,
    pub desk_count: u8,
    pub elevator: ElevatorDoors,
    pub boss: BossView,
    pub agents: Vec<AgentView>,
    pub history: Vec<HistoryEntry>,
}

/// One agent as the panels see it.
///
/// `queue_type`/`queue_index` are both absent or both present, and always
/// reflect the admission controller's current ordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentView {
    pub id: AgentId,
    pub number: u32,
    pub name: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desk: Option<u8>,
    pub backend_state: BackendState,
    pub phase: Phase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_type: Option<QueueFamily>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bubble: Option<String>,
}

/// The boss fixture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BossView {
    pub state: BossState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bubble: Option<String>,
}

impl Default for BossView {
    fn default() -> Self {
        Self { state: BossState::Idle, current_task: None, bubble: None }
    }
}

/// Elevator door rendering state, derived from car usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElevatorDoors {
    #[default]
    Closed,
    Arriving,
    Open,
    Departing,
}

/// One line in the event-log feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Strictly increasing within a session
    pub seq: u64,
    /// Event kind (e.g. "agent:reported")
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<AgentId>,
    pub summary: String,
    pub at_ms: u64,
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
