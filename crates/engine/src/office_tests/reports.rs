// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn a_first_report_creates_the_agent() {
    let mut floor = Floor::new();
    floor.drive(detailed_report(
        "agt-7",
        "working",
        None,
        Some("wire the login flow"),
        None,
        1_000_000,
    ));

    let agent = floor.agent("agt-7");
    assert_eq!(agent.number, 1);
    assert_eq!(agent.name, "Agent 1");
    assert_eq!(agent.color, PALETTE[0]);
    assert_eq!(agent.current_task.as_deref(), Some("wire the login flow"));
    assert_eq!(agent.created_at_ms, 1_000_000);
    assert_eq!(agent.phase, Phase::Arriving);
}

#[test]
fn provided_names_win_over_the_default() {
    let mut floor = Floor::new();
    floor.drive(detailed_report("agt-1", "working", Some("Scout"), None, None, 1_000_000));
    assert_eq!(floor.agent("agt-1").name, "Scout");

    // Payload-free updates keep the last write.
    floor.report("agt-1", "thinking");
    assert_eq!(floor.agent("agt-1").name, "Scout");

    floor.drive(detailed_report("agt-1", "working", Some("Scout II"), None, None, 1_000_500));
    assert_eq!(floor.agent("agt-1").name, "Scout II");
    assert_eq!(floor.agent("agt-1").updated_at_ms, 1_000_500);
}

#[test]
fn tool_calls_set_the_bubble_and_settled_states_clear_it() {
    let mut floor = Floor::new();
    floor.drive(detailed_report("agt-1", "working", None, None, Some("Read(main.rs)"), 1_000_000));
    assert_eq!(floor.agent("agt-1").bubble.as_deref(), Some("Read(main.rs)"));

    // No tool call, still busy: the bubble stays up.
    floor.report("agt-1", "thinking");
    assert_eq!(floor.agent("agt-1").bubble.as_deref(), Some("Read(main.rs)"));

    floor.report("agt-1", "waiting");
    assert_eq!(floor.agent("agt-1").bubble, None);
}

#[test]
fn unknown_states_are_kept_verbatim() {
    let mut floor = Floor::new();
    floor.report("agt-1", "grinding_coffee");
    let agent = floor.agent("agt-1");
    assert!(!agent.backend_state.is_known());
    assert_eq!(agent.backend_state.as_str(), "grinding_coffee");

    // Unknown states ask nothing of the choreography: the arrival completes
    // and the agent stays put.
    floor.settle();
    assert_eq!(floor.phase("agt-1"), Phase::Idle);
}

#[test]
fn the_agent_cap_refuses_new_records_only() {
    let mut floor = Floor::with_config(FloorConfig { max_agents: 2, ..FloorConfig::default() });
    floor.report("agt-1", "working");
    floor.report("agt-2", "working");
    floor.report("agt-3", "working");
    assert_eq!(floor.office.agent_count(), 2);
    assert!(floor.office.agent(&AgentId::from_string("agt-3")).is_none());

    // Updates to tracked agents still land.
    floor.report("agt-1", "thinking");
    assert_eq!(floor.agent("agt-1").backend_state, BackendState::Thinking);
}

#[test]
fn a_settle_report_cuts_the_conversation_short() {
    let mut floor = Floor::new();
    floor.report("agt-1", "working");
    floor.step();
    floor.step();
    assert_eq!(floor.phase("agt-1"), Phase::Conversing);

    floor.report("agt-1", "walking_to_desk");
    assert_eq!(floor.phase("agt-1"), Phase::WalkingToDesk);
    assert_eq!(floor.agent("agt-1").desk, Some(1));
}

#[test]
fn a_superseded_step_timer_is_ignored() {
    let mut floor = Floor::new();
    floor.report("agt-1", "working");
    floor.step();
    floor.step();
    assert_eq!(floor.phase("agt-1"), Phase::Conversing);

    // The settle request re-arms the step timer under a new epoch; the
    // conversation timer still fires later and must land as a no-op.
    floor.report("agt-1", "walking_to_desk");
    let epoch_after_kick = floor.agent("agt-1").epoch;
    floor.settle();

    assert_eq!(floor.phase("agt-1"), Phase::Idle);
    assert_eq!(floor.agent("agt-1").epoch, epoch_after_kick + 1);
}

#[test]
fn timers_for_unknown_agents_or_foreign_ids_are_noops() {
    let mut floor = Floor::new();
    floor.report("agt-1", "working");
    let before = floor.snapshot().history.len();

    let ghost = AgentId::from_string("agt-ghost");
    floor.drive(Event::TimerFired { id: TimerId::phase_step(&ghost, 3) });
    floor.drive(Event::TimerFired { id: TimerId::new("unrelated") });

    assert_eq!(floor.phase("agt-1"), Phase::Arriving);
    assert_eq!(floor.snapshot().history.len(), before);
}

#[test]
fn boss_reports_never_create_a_floor_agent() {
    let mut floor = Floor::new();
    floor.drive(detailed_report(
        "main",
        "working",
        None,
        Some("coordinating the refactor"),
        Some("Task(split the parser)"),
        1_000_000,
    ));

    assert_eq!(floor.office.agent_count(), 0);
    let view = floor.snapshot();
    assert_eq!(view.boss.state, BossState::Working);
    assert_eq!(view.boss.current_task.as_deref(), Some("coordinating the refactor"));
    assert_eq!(view.boss.bubble.as_deref(), Some("Task(split the parser)"));

    let last = view.history.last().cloned().unwrap();
    assert_eq!(last.kind, "agent:reported");
    assert_eq!(last.summary, "boss: working");
    assert_eq!(last.agent_id.as_ref().map(|id| id.as_str()), Some("main"));
}
