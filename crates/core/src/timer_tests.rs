// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn timer_id_display() {
    let id = TimerId::new("test-timer");
    assert_eq!(id.to_string(), "test-timer");
}

#[test]
fn timer_id_equality() {
    let id1 = TimerId::new("timer-1");
    let id2 = TimerId::new("timer-1");
    let id3 = TimerId::new("timer-2");

    assert_eq!(id1, id2);
    assert_ne!(id1, id3);
}

#[test]
fn phase_step_format() {
    let agent = AgentId::from_string("subagent-3");
    assert_eq!(TimerId::phase_step(&agent, 0).as_str(), "phase:subagent-3:0");
    assert_eq!(TimerId::phase_step(&agent, 17).as_str(), "phase:subagent-3:17");
}

#[test]
fn phase_step_round_trip() {
    let agent = AgentId::from_string("agt-abc");
    let id = TimerId::phase_step(&agent, 5);
    assert_eq!(id.as_phase_step(), Some((agent, 5)));
}

#[test]
fn phase_step_agent_may_contain_colons() {
    let agent = AgentId::from_string("team:alpha:7");
    let id = TimerId::phase_step(&agent, 2);
    assert_eq!(id.as_phase_step(), Some((agent, 2)));
}

#[test]
fn foreign_ids_do_not_parse() {
    assert_eq!(TimerId::new("liveness:job-123").as_phase_step(), None);
    assert_eq!(TimerId::new("phase:missing-epoch").as_phase_step(), None);
    assert_eq!(TimerId::new("phase:agt-x:not-a-number").as_phase_step(), None);
}

#[test]
fn timer_id_serde() {
    let id = TimerId::phase_step(&AgentId::from_string("a1"), 1);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"phase:a1:1\"");

    let parsed: TimerId = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, id);
}
