// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

fn agent(tag: &str) -> AgentId {
    AgentId::from_string(format!("agt-{tag}"))
}

#[test]
fn desk_grant_and_release() {
    let mut registry = ResourceRegistry::new(2, 1);
    let a = agent("a");
    let b = agent("b");

    assert!(registry.try_acquire(&Resource::Desk(1), &a));
    assert_eq!(registry.desk_of(&a), Some(1));

    // Held desk is denied to anyone else until released
    assert!(!registry.try_acquire(&Resource::Desk(1), &b));
    assert!(registry.release(&Resource::Desk(1), &a));
    assert!(registry.try_acquire(&Resource::Desk(1), &b));
}

#[test]
fn reacquire_is_a_noop_grant() {
    let mut registry = ResourceRegistry::new(2, 1);
    let a = agent("a");

    assert!(registry.try_acquire(&Resource::Desk(2), &a));
    assert!(registry.try_acquire(&Resource::Desk(2), &a));
    assert_eq!(registry.desk_of(&a), Some(2));

    assert!(registry.try_acquire(&Resource::Elevator, &a));
    assert!(registry.try_acquire(&Resource::Elevator, &a));
    assert_eq!(registry.available(&Resource::Elevator), 0);
}

#[test]
fn release_without_holding_is_a_noop() {
    let mut registry = ResourceRegistry::new(2, 1);
    let a = agent("a");
    let b = agent("b");

    assert!(registry.try_acquire(&Resource::Desk(1), &a));
    // b never held desk 1; a's claim survives
    assert!(!registry.release(&Resource::Desk(1), &b));
    assert_eq!(registry.desk_of(&a), Some(1));

    assert!(registry.release(&Resource::Desk(1), &a));
    assert!(!registry.release(&Resource::Desk(1), &a));
}

#[test]
fn desk_number_outside_the_floor_is_never_granted() {
    let mut registry = ResourceRegistry::new(2, 1);
    assert!(!registry.try_acquire(&Resource::Desk(9), &agent("a")));
    assert_eq!(registry.capacity_of(&Resource::Desk(9)), 0);
}

#[test]
fn elevator_respects_capacity() {
    let mut registry = ResourceRegistry::new(2, 2);
    let a = agent("a");
    let b = agent("b");
    let c = agent("c");

    assert!(registry.try_acquire(&Resource::Elevator, &a));
    assert!(registry.try_acquire(&Resource::Elevator, &b));
    assert!(!registry.try_acquire(&Resource::Elevator, &c));
    assert_eq!(registry.available(&Resource::Elevator), 0);

    assert!(registry.release(&Resource::Elevator, &a));
    assert!(registry.try_acquire(&Resource::Elevator, &c));
    assert_eq!(registry.elevator_occupants(), &[b, c]);
}

#[test]
fn availability_tracks_grants() {
    let mut registry = ResourceRegistry::new(1, 3);
    assert_eq!(registry.capacity_of(&Resource::Elevator), 3);
    assert_eq!(registry.available(&Resource::Elevator), 3);
    assert_eq!(registry.available(&Resource::Desk(1)), 1);

    registry.try_acquire(&Resource::Elevator, &agent("a"));
    registry.try_acquire(&Resource::Desk(1), &agent("a"));
    assert_eq!(registry.available(&Resource::Elevator), 2);
    assert_eq!(registry.available(&Resource::Desk(1)), 0);
}

#[test]
fn holdings_list_desk_and_elevator() {
    let mut registry = ResourceRegistry::new(2, 1);
    let a = agent("a");

    assert!(registry.holdings_of(&a).is_empty());
    registry.try_acquire(&Resource::Desk(2), &a);
    registry.try_acquire(&Resource::Elevator, &a);
    assert_eq!(registry.holdings_of(&a), vec![Resource::Desk(2), Resource::Elevator]);
}

#[parameterized(
    preferred_open  = { 3, &[], Some(3) },
    preferred_taken = { 1, &[1], Some(2) },
    scan_skips_held = { 2, &[1, 2, 3], Some(4) },
    floor_full      = { 1, &[1, 2, 3, 4], None },
)]
fn free_desk_selection(preferred: u8, taken: &[u8], want: Option<u8>) {
    let mut registry = ResourceRegistry::new(4, 1);
    for (i, number) in taken.iter().enumerate() {
        let holder = agent(&format!("holder{i}"));
        assert!(registry.try_acquire(&Resource::Desk(*number), &holder));
    }
    assert_eq!(registry.free_desk(preferred), want);
}
