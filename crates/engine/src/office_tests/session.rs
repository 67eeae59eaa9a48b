// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn the_first_report_opens_a_session() {
    let mut floor = Floor::new();
    assert!(floor.snapshot().session_id.is_none());

    floor.report("agt-1", "working");
    let view = floor.snapshot();
    assert!(view.session_id.is_some());
    assert_eq!(view.session_status, Some(SessionStatus::Active));
    assert_eq!(view.history[0].kind, "session:started");
    assert_eq!(view.history[0].seq, 0);
}

#[test]
fn an_explicit_start_resets_the_floor() {
    let mut floor = Floor::new();
    floor.report("agt-1", "working");
    floor.report("agt-2", "working");
    assert!(floor.scheduler.has_timers());

    floor.drive(session_started("ses-2"));
    assert_eq!(floor.office.agent_count(), 0);
    assert!(!floor.scheduler.has_timers());

    let view = floor.snapshot();
    assert_eq!(view.session_id.as_ref().map(|id| id.as_str()), Some("ses-2"));
    assert_eq!(view.history.len(), 1);
    assert_eq!(view.history[0].seq, 0);
    assert_eq!(view.history[0].summary, "session ses-2 started");

    // Numbering restarts with the floor.
    floor.report("agt-9", "working");
    assert_eq!(floor.agent("agt-9").number, 1);
}

#[test]
fn ending_the_session_freezes_the_floor() {
    let mut floor = Floor::new();
    floor.drive(session_started("ses-1"));
    floor.report("agt-1", "working");
    floor.step();
    assert_eq!(floor.phase("agt-1"), Phase::WalkingToReady);

    floor.drive(session_ended("ses-1"));
    let view = floor.snapshot();
    assert_eq!(view.session_status, Some(SessionStatus::Ended));
    assert_eq!(floor.office.agent_count(), 1);

    // In-flight walks still finish.
    floor.settle();
    assert_eq!(floor.phase("agt-1"), Phase::Idle);
}

#[test]
fn a_report_after_the_end_opens_a_fresh_session() {
    let mut floor = Floor::new();
    floor.drive(session_started("ses-1"));
    floor.report("agt-1", "working");
    floor.settle();
    floor.drive(session_ended("ses-1"));

    floor.report("agt-2", "working");
    let view = floor.snapshot();
    assert_eq!(view.session_status, Some(SessionStatus::Active));
    assert_ne!(view.session_id.as_ref().map(|id| id.as_str()), Some("ses-1"));
    assert_eq!(floor.office.agent_count(), 1);
    assert!(floor.office.agent(&AgentId::from_string("agt-1")).is_none());
    assert_eq!(floor.agent("agt-2").number, 1);
}

#[test]
fn an_end_for_a_stale_session_is_ignored() {
    let mut floor = Floor::new();
    floor.drive(session_started("ses-2"));
    let before = floor.snapshot().history.len();

    floor.drive(session_ended("ses-1"));
    let view = floor.snapshot();
    assert_eq!(view.session_status, Some(SessionStatus::Active));
    assert_eq!(view.history.len(), before);
}

#[test]
fn history_is_capped_and_keeps_the_newest_entries() {
    let mut floor = Floor::new();
    floor.report("agt-1", "working");
    for _ in 0..HISTORY_LIMIT {
        floor.report("agt-1", "thinking");
    }

    let history = floor.snapshot().history;
    assert_eq!(history.len(), HISTORY_LIMIT);
    // The session start, the arrival, and the first report scrolled off;
    // sequence numbers keep counting anyway.
    assert_eq!(history.last().unwrap().seq, (HISTORY_LIMIT as u64) + 1);
    assert!(history.first().unwrap().seq > 0);
}
