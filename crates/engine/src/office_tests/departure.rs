// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn a_completed_agent_departs_and_leaves_the_floor() {
    let mut floor = Floor::new();
    floor.report("agt-1", "working");
    floor.settle();
    assert_eq!(floor.phase("agt-1"), Phase::Idle);

    floor.report("agt-1", "completed");
    assert_eq!(floor.phase("agt-1"), Phase::Departing);
    // The desk frees the moment the agent stands up.
    assert_eq!(floor.agent("agt-1").desk, None);

    floor.step();
    assert_eq!(floor.phase("agt-1"), Phase::WalkingToElevator);
    floor.step();
    assert_eq!(floor.phase("agt-1"), Phase::InElevator);
    floor.step();
    assert_eq!(floor.office.agent_count(), 0);
    assert!(!floor.scheduler.has_timers());

    let history = floor.snapshot().history;
    let last = history.last().unwrap();
    assert_eq!(last.kind, "agent:removed");
    assert_eq!(last.summary, "Agent 1 left the office");
}

#[test]
fn departure_waits_for_a_settled_desk() {
    let mut floor = Floor::new();
    floor.report("agt-1", "working");
    floor.step();
    floor.step();
    assert_eq!(floor.phase("agt-1"), Phase::Conversing);

    // The request lands mid-conversation and must not interrupt it.
    floor.report("agt-1", "completed");
    assert_eq!(floor.phase("agt-1"), Phase::Conversing);

    // Once settled, the latched departure plays out on its own.
    floor.settle();
    assert_eq!(floor.office.agent_count(), 0);
}

#[test]
fn a_completion_latched_in_the_arrival_queue_departs_after_admission() {
    let mut floor = Floor::new();
    floor.report("agt-1", "working");
    floor.report("agt-2", "working");
    floor.step();
    assert_eq!(floor.phase("agt-2"), Phase::InArrivalQueue);

    // The completion lands while the agent is still waiting to get in.
    floor.report("agt-2", "completed");
    assert_eq!(floor.phase("agt-2"), Phase::InArrivalQueue);

    // Admission resolves, the walk-in plays out, and the latched departure
    // fires at the desk without a second report.
    floor.settle();
    assert_eq!(floor.phase("agt-1"), Phase::Idle);
    assert_eq!(floor.office.agent_count(), 1);
    assert!(floor.office.agent(&AgentId::from_string("agt-2")).is_none());
}

#[test]
fn a_working_report_cannot_revert_a_departure() {
    let mut floor = Floor::new();
    floor.report("agt-1", "working");
    floor.settle();
    floor.report("agt-1", "completed");
    assert_eq!(floor.phase("agt-1"), Phase::Departing);

    floor.report("agt-1", "working");
    assert_eq!(floor.phase("agt-1"), Phase::Departing);

    floor.settle();
    assert_eq!(floor.office.agent_count(), 0);

    // A later report means a brand-new record, on a fresh number.
    floor.report("agt-1", "working");
    assert_eq!(floor.agent("agt-1").number, 2);
    assert_eq!(floor.agent("agt-1").name, "Agent 2");
}

#[test]
fn departures_take_the_free_slot_before_arrivals() {
    let mut floor = Floor::new();
    floor.report("agt-old", "working");
    floor.settle();
    assert_eq!(floor.phase("agt-old"), Phase::Idle);

    // A fresh arrival takes the car onto the floor...
    floor.report("agt-new", "working");
    floor.step();
    assert_eq!(floor.phase("agt-new"), Phase::WalkingToReady);

    // ...while a late arrival and a departure both line up behind it.
    floor.report("agt-late", "working");
    floor.report("agt-old", "completed");
    floor.step();
    floor.step();
    assert_eq!(floor.phase("agt-late"), Phase::InArrivalQueue);
    assert_eq!(floor.phase("agt-old"), Phase::InDepartureQueue);

    // The slot frees at the ready point; the departure wins it.
    floor.step();
    assert_eq!(floor.phase("agt-old"), Phase::WalkingToElevator);
    assert_eq!(floor.phase("agt-late"), Phase::InArrivalQueue);

    floor.settle();
    assert_eq!(floor.office.agent_count(), 2);
    assert_eq!(floor.phase("agt-late"), Phase::Idle);
}

#[test]
fn riders_share_the_car_up_to_capacity() {
    let mut floor =
        Floor::with_config(FloorConfig { elevator_capacity: 2, ..FloorConfig::default() });
    for id in ["agt-1", "agt-2", "agt-3"] {
        floor.report(id, "working");
    }
    floor.settle();

    for id in ["agt-1", "agt-2", "agt-3"] {
        floor.report(id, "completed");
    }
    floor.step();
    assert_eq!(floor.phase("agt-1"), Phase::WalkingToElevator);
    assert_eq!(floor.phase("agt-2"), Phase::WalkingToElevator);
    assert_eq!(floor.phase("agt-3"), Phase::InDepartureQueue);

    floor.settle();
    assert_eq!(floor.office.agent_count(), 0);

    let history = floor.snapshot().history;
    let exits: Vec<&str> = history
        .iter()
        .filter(|entry| entry.kind == "agent:removed")
        .map(|entry| entry.summary.as_str())
        .collect();
    assert_eq!(
        exits,
        ["Agent 1 left the office", "Agent 2 left the office", "Agent 3 left the office"]
    );
}
