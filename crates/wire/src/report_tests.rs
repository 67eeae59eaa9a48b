// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn parses_a_typical_feed_entry() {
    let json = r#"{
        "agentId": "subagent-1",
        "agentName": "fix-lints",
        "state": "working",
        "timestamp": "2026-02-11T09:30:00Z",
        "taskSummary": "Fix clippy lints in parser",
        "toolCallSummary": "Bash: cargo clippy"
    }"#;
    let report: AgentReport = serde_json::from_str(json).unwrap();
    assert_eq!(report.agent_id(), AgentId::from_string("subagent-1"));
    assert_eq!(report.state, BackendState::Working);
    assert_eq!(report.agent_name.as_deref(), Some("fix-lints"));
    assert_eq!(report.tool_call_summary.as_deref(), Some("Bash: cargo clippy"));
}

#[test]
fn ignores_fields_it_does_not_know() {
    let json = r##"{"agentId":"a1","state":"thinking","todos":[{"text":"x"}],"color":"#fff"}"##;
    let report: AgentReport = serde_json::from_str(json).unwrap();
    assert_eq!(report.state, BackendState::Thinking);
}

#[test]
fn unknown_state_is_carried_verbatim() {
    let json = r#"{"agentId":"a1","state":"context_compaction"}"#;
    let report: AgentReport = serde_json::from_str(json).unwrap();
    assert_eq!(report.state.as_str(), "context_compaction");
    assert!(!report.state.is_known());
}

#[test]
fn missing_agent_id_addresses_the_boss() {
    let json = r#"{"state":"working"}"#;
    let report: AgentReport = serde_json::from_str(json).unwrap();
    assert_eq!(report.agent_id(), AgentId::from_string(BOSS_AGENT_ID));
}

#[test]
fn timestamp_parses_rfc3339() {
    let report = AgentReport {
        timestamp: Some("1970-01-01T00:00:02Z".into()),
        ..AgentReport::new("a1", "working")
    };
    assert_eq!(report.timestamp_ms(9_999), 2_000);
}

#[test]
fn malformed_timestamp_falls_back_to_receiver_clock() {
    let report = AgentReport {
        timestamp: Some("yesterday-ish".into()),
        ..AgentReport::new("a1", "working")
    };
    assert_eq!(report.timestamp_ms(4_242), 4_242);
    assert_eq!(AgentReport::new("a1", "working").timestamp_ms(4_242), 4_242);
}

#[test]
fn into_event_carries_payloads() {
    let report = AgentReport {
        task_summary: Some("write docs".into()),
        ..AgentReport::new("subagent-9", "completed")
    };
    let event = report.into_event(7_000);
    assert_eq!(
        event,
        Event::AgentReported {
            id: AgentId::from_string("subagent-9"),
            state: BackendState::Completed,
            name: None,
            task: Some("write docs".into()),
            tool_call: None,
            at_ms: 7_000,
        }
    );
}
