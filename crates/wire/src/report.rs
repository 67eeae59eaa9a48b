// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inbound agent report from the backend feed.

use bullpen_core::{AgentId, BackendState, Event, BOSS_AGENT_ID};
use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// One status report from the backend feed.
///
/// Unknown fields are ignored (the feed grows fields faster than consumers
/// do), and `state` accepts any string; values this build does not know
/// are carried through verbatim. A report without an `agentId` addresses
/// the boss, matching the feed convention.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<AgentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    pub state: BackendState,
    /// RFC 3339; the receiver's clock is used when absent or malformed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_summary: Option<String>,
}

impl AgentReport {
    /// Minimal report, the way most feed entries look.
    pub fn new(agent_id: impl Into<AgentId>, state: impl Into<BackendState>) -> Self {
        Self {
            agent_id: Some(agent_id.into()),
            agent_name: None,
            state: state.into(),
            timestamp: None,
            task_summary: None,
            tool_call_summary: None,
        }
    }

    /// The addressed agent; reports without an id go to the boss.
    pub fn agent_id(&self) -> AgentId {
        self.agent_id.clone().unwrap_or_else(|| AgentId::from_string(BOSS_AGENT_ID))
    }

    /// Report timestamp as epoch millis, falling back to `fallback_ms`.
    pub fn timestamp_ms(&self, fallback_ms: u64) -> u64 {
        self.timestamp
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.timestamp_millis().max(0) as u64)
            .unwrap_or(fallback_ms)
    }

    /// Convert into an intake event, stamping `fallback_ms` when the feed
    /// did not carry a usable timestamp.
    pub fn into_event(self, fallback_ms: u64) -> Event {
        let at_ms = self.timestamp_ms(fallback_ms);
        let id = self.agent_id();
        Event::AgentReported {
            id,
            state: self.state,
            name: self.agent_name,
            task: self.task_summary,
            tool_call: self.tool_call_summary,
            at_ms,
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
