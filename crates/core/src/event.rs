// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events on the intake path.
//!
//! Everything that mutates the floor arrives here: backend reports, removal
//! requests, session lifecycle, and the engine's own timer callbacks. The
//! serialized intake queue is the single-writer guarantee; handlers never
//! race because there is exactly one consumer.

use crate::agent::{AgentId, BackendState};
use crate::session::SessionId;
use crate::timer::TimerId;
use serde::{Deserialize, Serialize};

/// Events that drive floor reconciliation.
///
/// Serializes with `{"type": "event:name", ...fields}` format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    #[serde(rename = "system:shutdown")]
    Shutdown,

    /// A scheduler deadline elapsed. The id routes back to the owning agent.
    #[serde(rename = "timer:fired")]
    TimerFired { id: TimerId },

    #[serde(rename = "session:started")]
    SessionStarted { id: SessionId },

    #[serde(rename = "session:ended")]
    SessionEnded { id: SessionId },

    /// The backend reported an agent's current state.
    ///
    /// `state` is kept verbatim even when unknown; the optional payloads are
    /// last-write-wins display strings.
    #[serde(rename = "agent:reported")]
    AgentReported {
        id: AgentId,
        state: BackendState,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        task: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tool_call: Option<String>,
        /// Wall-clock millis the report was stamped with
        at_ms: u64,
    },

    /// The backend dropped an agent (cancellation, disconnect, cleanup).
    #[serde(rename = "agent:removed")]
    AgentRemoved { id: AgentId },
}

impl Event {
    /// The wire tag, for logs and history kinds.
    pub fn name(&self) -> &'static str {
        match self {
            Event::Shutdown => "system:shutdown",
            Event::TimerFired { .. } => "timer:fired",
            Event::SessionStarted { .. } => "session:started",
            Event::SessionEnded { .. } => "session:ended",
            Event::AgentReported { .. } => "agent:reported",
            Event::AgentRemoved { .. } => "agent:removed",
        }
    }

    /// One-line summary for log spans.
    pub fn log_summary(&self) -> String {
        match self {
            Event::Shutdown => "system:shutdown".to_string(),
            Event::TimerFired { id } => format!("timer:fired {id}"),
            Event::SessionStarted { id } => format!("session:started {id}"),
            Event::SessionEnded { id } => format!("session:ended {id}"),
            Event::AgentReported { id, state, .. } => format!("agent:reported {id} {state}"),
            Event::AgentRemoved { id } => format!("agent:removed {id}"),
        }
    }

    /// The agent this event addresses, if any.
    pub fn agent_id(&self) -> Option<&AgentId> {
        match self {
            Event::AgentReported { id, .. } | Event::AgentRemoved { id } => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
