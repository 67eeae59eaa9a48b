// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn reported(id: &str, state: &str) -> Event {
    reported_at(id, state, 1_000)
}

fn reported_at(id: &str, state: &str, at_ms: u64) -> Event {
    Event::AgentReported {
        id: AgentId::from_string(id),
        state: BackendState::parse(state),
        name: None,
        task: None,
        tool_call: None,
        at_ms,
    }
}

#[test]
fn serializes_with_type_tag() {
    let json = serde_json::to_value(reported("subagent-1", "working")).unwrap();
    assert_eq!(json["type"], "agent:reported");
    assert_eq!(json["id"], "subagent-1");
    assert_eq!(json["state"], "working");
}

#[test]
fn absent_payloads_are_omitted() {
    let json = serde_json::to_value(reported("a", "waiting")).unwrap();
    assert!(json.get("task").is_none());
    assert!(json.get("tool_call").is_none());
    assert!(json.get("name").is_none());
}

#[test]
fn round_trips_unknown_backend_state() {
    let event = reported("a", "daydreaming");
    let json = serde_json::to_string(&event).unwrap();
    let back: Event = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}

#[test]
fn deserializes_without_optional_fields() {
    let json = r#"{"type":"agent:reported","id":"a1","state":"thinking","at_ms":5}"#;
    let event: Event = serde_json::from_str(json).unwrap();
    assert_eq!(event, reported_at("a1", "thinking", 5));
}

#[test]
fn shutdown_is_tag_only() {
    let json = serde_json::to_string(&Event::Shutdown).unwrap();
    assert_eq!(json, r#"{"type":"system:shutdown"}"#);
}

#[test]
fn name_matches_tag() {
    assert_eq!(reported("a", "working").name(), "agent:reported");
    assert_eq!(Event::AgentRemoved { id: "a".into() }.name(), "agent:removed");
    assert_eq!(Event::Shutdown.name(), "system:shutdown");
}

#[test]
fn log_summary_names_the_agent() {
    assert_eq!(
        reported("subagent-2", "completed").log_summary(),
        "agent:reported subagent-2 completed"
    );
    let remove = Event::AgentRemoved { id: AgentId::from_string("subagent-2") };
    assert_eq!(remove.log_summary(), "agent:removed subagent-2");
    assert_eq!(remove.agent_id(), Some(&AgentId::from_string("subagent-2")));
    assert_eq!(Event::Shutdown.agent_id(), None);
}
