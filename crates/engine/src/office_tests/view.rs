// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn agents_sort_by_number_in_the_snapshot() {
    let mut floor = Floor::new();
    for id in ["agt-c", "agt-a", "agt-b"] {
        floor.report(id, "working");
    }

    let numbers: Vec<u32> = floor.snapshot().agents.iter().map(|a| a.number).collect();
    assert_eq!(numbers, [1, 2, 3]);

    let ids: Vec<String> = floor.snapshot().agents.iter().map(|a| a.id.to_string()).collect();
    assert_eq!(ids, ["agt-c", "agt-a", "agt-b"]);
}

#[test]
fn colors_cycle_through_the_palette() {
    let mut floor =
        Floor::with_config(FloorConfig { max_agents: 16, desks: 12, ..FloorConfig::default() });
    for n in 0..9 {
        floor.report(&format!("agt-{n}"), "working");
    }

    let view = floor.snapshot();
    assert_eq!(view.agents[0].color, PALETTE[0]);
    assert_eq!(view.agents[7].color, PALETTE[7]);
    assert_eq!(view.agents[8].color, PALETTE[0]);
}

#[test]
fn boss_presence_tracks_the_floor() {
    let mut floor = Floor::new();
    assert_eq!(floor.snapshot().boss.state, BossState::Idle);

    floor.report("agt-1", "reporting");
    assert_eq!(floor.snapshot().boss.state, BossState::Delegating);

    floor.step(); // onto the floor
    floor.step(); // ready point, toward the boss
    floor.step(); // at the boss
    assert_eq!(floor.phase("agt-1"), Phase::AtBoss);
    assert_eq!(floor.snapshot().boss.state, BossState::Reviewing);

    floor.settle();
    assert_eq!(floor.snapshot().boss.state, BossState::Idle);
}

#[parameterized(
    working   = { "working", BossState::Working },
    thinking  = { "thinking", BossState::Working },
    blocked   = { "waiting_permission", BossState::WaitingPermission },
    completed = { "completed", BossState::Completing },
    waiting   = { "waiting", BossState::Idle },
    unknown   = { "daydreaming", BossState::Idle },
)]
fn boss_fallback_maps_backend_states(state: &str, derived: BossState) {
    let mut floor = Floor::new();
    floor.report("main", state);
    assert_eq!(floor.snapshot().boss.state, derived);
}

#[test]
fn elevator_doors_follow_the_floor() {
    let mut floor =
        Floor::with_config(FloorConfig { elevator_capacity: 2, ..FloorConfig::default() });
    assert_eq!(floor.snapshot().elevator, ElevatorDoors::Closed);

    floor.report("agt-1", "working");
    floor.step();
    assert_eq!(floor.phase("agt-1"), Phase::WalkingToReady);
    assert_eq!(floor.snapshot().elevator, ElevatorDoors::Arriving);

    floor.settle();
    assert_eq!(floor.snapshot().elevator, ElevatorDoors::Closed);

    floor.report("agt-1", "completed");
    floor.step();
    assert_eq!(floor.phase("agt-1"), Phase::WalkingToElevator);
    assert_eq!(floor.snapshot().elevator, ElevatorDoors::Open);

    floor.step();
    assert_eq!(floor.phase("agt-1"), Phase::InElevator);
    assert_eq!(floor.snapshot().elevator, ElevatorDoors::Departing);
}

#[test]
fn a_departing_rider_outranks_an_open_door() {
    let mut floor =
        Floor::with_config(FloorConfig { elevator_capacity: 2, ..FloorConfig::default() });
    floor.report("agt-1", "working");
    floor.report("agt-2", "working");
    floor.settle();

    floor.report("agt-1", "completed");
    floor.step();
    floor.report("agt-2", "completed");
    floor.step();
    floor.step();

    assert_eq!(floor.phase("agt-1"), Phase::InElevator);
    assert_eq!(floor.phase("agt-2"), Phase::WalkingToElevator);
    assert_eq!(floor.snapshot().elevator, ElevatorDoors::Departing);
}
