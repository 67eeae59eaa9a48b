// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn agent_id_accepts_backend_shapes() {
    let id = AgentId::from_string("subagent-42");
    assert_eq!(id.as_str(), "subagent-42");
    assert_eq!(id, "subagent-42");
}

#[test]
fn generated_agent_id_has_prefix() {
    assert!(AgentId::new().as_str().starts_with("agt-"));
}

#[parameterized(
    working            = { BackendState::Working, "working" },
    waiting_permission = { BackendState::WaitingPermission, "waiting_permission" },
    reporting          = { BackendState::Reporting, "reporting" },
    reporting_done     = { BackendState::ReportingDone, "reporting_done" },
    walking_to_desk    = { BackendState::WalkingToDesk, "walking_to_desk" },
    leaving            = { BackendState::Leaving, "leaving" },
    waiting            = { BackendState::Waiting, "waiting" },
    completed          = { BackendState::Completed, "completed" },
    thinking           = { BackendState::Thinking, "thinking" },
    arriving           = { BackendState::Arriving, "arriving" },
    in_elevator        = { BackendState::InElevator, "in_elevator" },
)]
fn backend_state_round_trips(state: BackendState, wire: &str) {
    assert_eq!(state.as_str(), wire);
    assert_eq!(BackendState::parse(wire), state);
    assert!(state.is_known());
}

#[test]
fn unknown_state_is_kept_verbatim() {
    let state = BackendState::parse("compacting_context");
    assert_eq!(state, BackendState::Other("compacting_context".into()));
    assert_eq!(state.as_str(), "compacting_context");
    assert!(!state.is_known());
}

#[test]
fn unknown_state_survives_serde() {
    let state = BackendState::parse("on_strike");
    let json = serde_json::to_string(&state).unwrap();
    assert_eq!(json, "\"on_strike\"");
    let back: BackendState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}

#[test]
fn known_state_serializes_as_wire_string() {
    let json = serde_json::to_string(&BackendState::WaitingPermission).unwrap();
    assert_eq!(json, "\"waiting_permission\"");
    let back: BackendState = serde_json::from_str("\"completed\"").unwrap();
    assert_eq!(back, BackendState::Completed);
}

#[test]
fn boss_id_is_not_a_floor_agent_id() {
    assert_eq!(BOSS_AGENT_ID, "main");
    assert_ne!(AgentId::new(), BOSS_AGENT_ID);
}
