// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    arriving          = { BackendState::Arriving, PhaseFamily::Arrive },
    reporting         = { BackendState::Reporting, PhaseFamily::Report },
    walking_to_desk   = { BackendState::WalkingToDesk, PhaseFamily::Settle },
    completed         = { BackendState::Completed, PhaseFamily::Depart },
    leaving           = { BackendState::Leaving, PhaseFamily::Depart },
    in_elevator       = { BackendState::InElevator, PhaseFamily::Depart },
    working           = { BackendState::Working, PhaseFamily::Stay },
    thinking          = { BackendState::Thinking, PhaseFamily::Stay },
    waiting           = { BackendState::Waiting, PhaseFamily::Stay },
    needs_permission  = { BackendState::WaitingPermission, PhaseFamily::Stay },
    reporting_done    = { BackendState::ReportingDone, PhaseFamily::Stay },
)]
fn backend_states_map_to_families(state: BackendState, family: PhaseFamily) {
    assert_eq!(desired_family(&state), family);
}

#[test]
fn unknown_states_never_move_anyone() {
    let state = BackendState::parse("daydreaming");
    assert!(!state.is_known());
    assert_eq!(desired_family(&state), PhaseFamily::Stay);
}

#[test]
fn every_timed_phase_has_a_duration() {
    for phase in [
        Phase::Arriving,
        Phase::WalkingToReady,
        Phase::Conversing,
        Phase::WalkingToBoss,
        Phase::AtBoss,
        Phase::WalkingToDesk,
        Phase::Departing,
        Phase::WalkingToElevator,
        Phase::InElevator,
    ] {
        assert!(phase.is_timed());
        assert!(step_duration(phase).is_some(), "{phase} should have a step duration");
    }
}

#[test]
fn waiting_phases_have_no_duration() {
    for phase in [Phase::Idle, Phase::InArrivalQueue, Phase::InDepartureQueue] {
        assert!(!phase.is_timed());
        assert_eq!(step_duration(phase), None);
    }
}

#[test]
fn ready_point_branches_on_reporting() {
    assert_eq!(ready_exit(&BackendState::Reporting), Phase::WalkingToBoss);
    assert_eq!(ready_exit(&BackendState::Arriving), Phase::Conversing);
    assert_eq!(ready_exit(&BackendState::Working), Phase::Conversing);
    assert_eq!(ready_exit(&BackendState::parse("mystery")), Phase::Conversing);
}

#[parameterized(
    walking_to_desk = { BackendState::WalkingToDesk, true },
    leaving         = { BackendState::Leaving, true },
    completed       = { BackendState::Completed, true },
    waiting         = { BackendState::Waiting, true },
    working         = { BackendState::Working, false },
    thinking        = { BackendState::Thinking, false },
    reporting       = { BackendState::Reporting, false },
    unknown         = { BackendState::parse("mystery"), false },
)]
fn settled_states_wipe_the_bubble(state: BackendState, wiped: bool) {
    assert_eq!(clears_bubble(&state), wiped);
}
