// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn removal_mid_walk_cancels_the_timer_and_frees_the_slot() {
    let mut floor = Floor::new();
    floor.report("agt-1", "working");
    floor.step();
    assert_eq!(floor.phase("agt-1"), Phase::WalkingToReady);
    assert!(floor.scheduler.has_timers());

    floor.remove("agt-1");
    assert_eq!(floor.office.agent_count(), 0);
    assert!(!floor.scheduler.has_timers());

    // The slot went back: a new arrival sails straight through.
    floor.report("agt-2", "working");
    floor.step();
    assert_eq!(floor.phase("agt-2"), Phase::WalkingToReady);
}

#[test]
fn removal_of_a_settled_agent_frees_the_desk() {
    let mut floor = Floor::with_config(FloorConfig { desks: 1, ..FloorConfig::default() });
    floor.report("agt-1", "working");
    floor.settle();
    assert_eq!(floor.agent("agt-1").desk, Some(1));

    floor.remove("agt-1");
    let last = floor.snapshot().history.last().cloned().unwrap();
    assert_eq!(last.kind, "agent:removed");
    assert_eq!(last.summary, "Agent 1 was removed");

    floor.report("agt-2", "working");
    floor.settle();
    assert_eq!(floor.agent("agt-2").desk, Some(1));
}

#[test]
fn removal_renumbers_the_arrival_queue() {
    let mut floor = Floor::new();
    for id in ["agt-1", "agt-2", "agt-3"] {
        floor.report(id, "working");
    }
    floor.step();
    assert_eq!(floor.phase("agt-2"), Phase::InArrivalQueue);
    assert_eq!(floor.phase("agt-3"), Phase::InArrivalQueue);

    floor.remove("agt-2");
    let view = floor.snapshot();
    let third = view.agents.iter().find(|a| a.id.as_str() == "agt-3").unwrap();
    assert_eq!(third.queue_index, Some(0));

    floor.settle();
    assert_eq!(floor.office.agent_count(), 2);
    assert_eq!(floor.phase("agt-3"), Phase::Idle);
}

#[test]
fn removing_an_unknown_agent_is_a_noop() {
    let mut floor = Floor::new();
    floor.report("agt-1", "working");
    let before = floor.snapshot().history.len();

    floor.remove("agt-ghost");
    assert_eq!(floor.office.agent_count(), 1);
    assert_eq!(floor.snapshot().history.len(), before);
}
