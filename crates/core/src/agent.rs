// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent identity and the backend-reported state vocabulary.
//!
//! The session backend owns agent identity: ids arrive on the wire and are
//! kept verbatim. The same goes for states. The backend may grow states this
//! build has never heard of, so [`BackendState`] carries unknown values as
//! opaque strings instead of rejecting them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smol_str::SmolStr;

crate::define_id! {
    /// Identifier for an agent on the floor.
    ///
    /// Backend-assigned ids come in through `from_string` and keep whatever
    /// shape the backend gave them; `new()` is for locally generated ids in
    /// tests and tooling.
    pub struct AgentId("agt-");
}

/// Reserved agent id addressing the boss fixture.
///
/// The event feed reports the orchestrating session under this id (or under
/// no id at all); everything else is a floor agent.
pub const BOSS_AGENT_ID: &str = "main";

/// Coarse agent status as reported by the session backend.
///
/// Stored verbatim on the agent record. The choreography layer derives its
/// own phases from this; nothing here implies a phase by itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BackendState {
    /// Actively processing or running tools
    Working,
    /// Blocked on a permission prompt
    WaitingPermission,
    /// Reporting in (arrival briefing)
    Reporting,
    /// Finished reporting results
    ReportingDone,
    /// Backend choreography hint: head to the desk
    WalkingToDesk,
    /// Backend choreography hint: leave the floor
    Leaving,
    /// Idle, waiting for work
    Waiting,
    /// Work complete
    Completed,
    /// Model is thinking (no tool activity)
    Thinking,
    /// Just spawned, entering the floor
    Arriving,
    /// Backend choreography hint: riding the elevator out
    InElevator,
    /// Any state this build does not recognize, kept verbatim
    Other(SmolStr),
}

impl BackendState {
    /// Parse a wire string. Never fails: unrecognized values become
    /// [`BackendState::Other`] and round-trip unchanged.
    pub fn parse(s: &str) -> Self {
        match s {
            "working" => BackendState::Working,
            "waiting_permission" => BackendState::WaitingPermission,
            "reporting" => BackendState::Reporting,
            "reporting_done" => BackendState::ReportingDone,
            "walking_to_desk" => BackendState::WalkingToDesk,
            "leaving" => BackendState::Leaving,
            "waiting" => BackendState::Waiting,
            "completed" => BackendState::Completed,
            "thinking" => BackendState::Thinking,
            "arriving" => BackendState::Arriving,
            "in_elevator" => BackendState::InElevator,
            other => BackendState::Other(SmolStr::new(other)),
        }
    }

    /// The wire spelling of this state.
    pub fn as_str(&self) -> &str {
        match self {
            BackendState::Working => "working",
            BackendState::WaitingPermission => "waiting_permission",
            BackendState::Reporting => "reporting",
            BackendState::ReportingDone => "reporting_done",
            BackendState::WalkingToDesk => "walking_to_desk",
            BackendState::Leaving => "leaving",
            BackendState::Waiting => "waiting",
            BackendState::Completed => "completed",
            BackendState::Thinking => "thinking",
            BackendState::Arriving => "arriving",
            BackendState::InElevator => "in_elevator",
            BackendState::Other(s) => s,
        }
    }

    /// Whether this build recognizes the state.
    pub fn is_known(&self) -> bool {
        !matches!(self, BackendState::Other(_))
    }
}

impl std::fmt::Display for BackendState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Serialized as the bare wire string so unknown states survive a round trip.
impl Serialize for BackendState {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BackendState {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = SmolStr::deserialize(d)?;
        Ok(BackendState::parse(&s))
    }
}

impl From<&str> for BackendState {
    fn from(s: &str) -> Self {
        BackendState::parse(s)
    }
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod tests;
