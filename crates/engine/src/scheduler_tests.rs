// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use bullpen_core::{Clock, FakeClock};

#[test]
fn scheduler_timer_lifecycle() {
    let clock = FakeClock::new();
    let mut scheduler = Scheduler::new();

    scheduler.set_timer(TimerId::new("test"), Duration::from_secs(10), clock.now());
    assert!(scheduler.has_timers());
    assert!(scheduler.next_deadline().is_some());

    // Timer hasn't fired yet
    clock.advance(Duration::from_secs(5));
    let events = scheduler.fired_timers(clock.now());
    assert!(events.is_empty());
    assert!(scheduler.has_timers());

    // Timer fires
    clock.advance(Duration::from_secs(10));
    let events = scheduler.fired_timers(clock.now());
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], Event::TimerFired { ref id } if id == "test"));
    assert!(!scheduler.has_timers());
}

#[test]
fn scheduler_cancel_timer() {
    let clock = FakeClock::new();
    let mut scheduler = Scheduler::new();

    scheduler.set_timer(TimerId::new("test"), Duration::from_secs(10), clock.now());
    scheduler.cancel_timer("test");

    clock.advance(Duration::from_secs(15));
    let events = scheduler.fired_timers(clock.now());
    assert!(events.is_empty());
}

#[test]
fn setting_the_same_id_rearms_the_deadline() {
    let clock = FakeClock::new();
    let mut scheduler = Scheduler::new();

    scheduler.set_timer(TimerId::new("step"), Duration::from_secs(5), clock.now());
    scheduler.set_timer(TimerId::new("step"), Duration::from_secs(20), clock.now());

    // Original deadline passes without a fire
    clock.advance(Duration::from_secs(10));
    assert!(scheduler.fired_timers(clock.now()).is_empty());

    clock.advance(Duration::from_secs(15));
    let events = scheduler.fired_timers(clock.now());
    assert_eq!(events.len(), 1);
}

#[test]
fn due_timers_drain_earliest_first() {
    let clock = FakeClock::new();
    let mut scheduler = Scheduler::new();

    scheduler.set_timer(TimerId::new("late"), Duration::from_secs(30), clock.now());
    scheduler.set_timer(TimerId::new("early"), Duration::from_secs(10), clock.now());
    scheduler.set_timer(TimerId::new("middle"), Duration::from_secs(20), clock.now());

    assert_eq!(scheduler.next_deadline(), Some(clock.now() + Duration::from_secs(10)));

    clock.advance(Duration::from_secs(60));
    let fired: Vec<String> = scheduler
        .fired_timers(clock.now())
        .into_iter()
        .filter_map(|event| match event {
            Event::TimerFired { id } => Some(id.to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(fired, vec!["early", "middle", "late"]);
}
