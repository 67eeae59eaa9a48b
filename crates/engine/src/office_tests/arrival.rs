// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use bullpen_core::QueueFamily;

#[test]
fn agent_walks_the_full_arrival_route() {
    let mut floor = Floor::new();
    floor.report("agt-1", "working");
    assert_eq!(floor.phase("agt-1"), Phase::Arriving);

    floor.step();
    assert_eq!(floor.phase("agt-1"), Phase::WalkingToReady);
    floor.step();
    assert_eq!(floor.phase("agt-1"), Phase::Conversing);
    floor.step();
    assert_eq!(floor.phase("agt-1"), Phase::WalkingToDesk);
    assert_eq!(floor.agent("agt-1").desk, Some(1));
    floor.step();
    assert_eq!(floor.phase("agt-1"), Phase::Idle);
    assert!(!floor.scheduler.has_timers());
}

#[test]
fn reporting_agents_detour_past_the_boss() {
    let mut floor = Floor::new();
    floor.report("agt-1", "reporting");
    floor.step(); // onto the floor
    floor.step(); // ready point
    assert_eq!(floor.phase("agt-1"), Phase::WalkingToBoss);

    floor.step();
    assert_eq!(floor.phase("agt-1"), Phase::AtBoss);
    assert_eq!(floor.snapshot().boss.state, BossState::Reviewing);

    floor.step();
    assert_eq!(floor.phase("agt-1"), Phase::WalkingToDesk);
    floor.settle();
    assert_eq!(floor.phase("agt-1"), Phase::Idle);
}

#[test]
fn a_full_car_sends_arrivals_to_the_queue() {
    let mut floor = Floor::new();
    floor.report("agt-1", "working");
    floor.report("agt-2", "working");

    // Both step timers land together; the earlier report wins the only slot.
    floor.step();
    assert_eq!(floor.phase("agt-1"), Phase::WalkingToReady);
    assert_eq!(floor.phase("agt-2"), Phase::InArrivalQueue);

    let view = floor.snapshot();
    let waiting = view.agents.iter().find(|a| a.id.as_str() == "agt-2").unwrap();
    assert_eq!(waiting.queue_type, Some(QueueFamily::Arrival));
    assert_eq!(waiting.queue_index, Some(0));

    // The slot frees when agt-1 steps onto the floor; agt-2 is admitted in
    // the same pass.
    floor.step();
    assert_eq!(floor.phase("agt-1"), Phase::Conversing);
    assert_eq!(floor.phase("agt-2"), Phase::WalkingToReady);

    floor.settle();
    assert_eq!(floor.phase("agt-1"), Phase::Idle);
    assert_eq!(floor.phase("agt-2"), Phase::Idle);
    assert_eq!(floor.agent("agt-1").desk, Some(1));
    assert_eq!(floor.agent("agt-2").desk, Some(2));
}

#[test]
fn desks_run_out_and_the_agent_stands() {
    let mut floor = Floor::with_config(FloorConfig {
        desks: 1,
        elevator_capacity: 4,
        ..FloorConfig::default()
    });
    floor.report("agt-1", "working");
    floor.report("agt-2", "working");
    floor.settle();

    assert_eq!(floor.agent("agt-1").desk, Some(1));
    assert_eq!(floor.phase("agt-2"), Phase::Idle);
    assert_eq!(floor.agent("agt-2").desk, None);
}

#[test]
fn desks_are_assigned_by_agent_number() {
    let mut floor = Floor::new();
    for id in ["agt-a", "agt-b", "agt-c"] {
        floor.report(id, "working");
    }
    floor.settle();

    assert_eq!(floor.agent("agt-a").desk, Some(1));
    assert_eq!(floor.agent("agt-b").desk, Some(2));
    assert_eq!(floor.agent("agt-c").desk, Some(3));
}
