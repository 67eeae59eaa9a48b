// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Choreography policy: what a backend state asks of the floor, and how long
//! each timed step takes.
//!
//! Step durations are animation pacing, not backend facts. Nothing here
//! blocks on the backend; a slow backend just means the agent settles at its
//! desk and waits there.

use bullpen_core::{BackendState, Phase};
use std::time::Duration;

const ARRIVING: Duration = Duration::from_millis(400);
const WALKING_TO_READY: Duration = Duration::from_millis(1200);
const CONVERSING: Duration = Duration::from_millis(1500);
const WALKING_TO_BOSS: Duration = Duration::from_millis(900);
const AT_BOSS: Duration = Duration::from_millis(1200);
const WALKING_TO_DESK: Duration = Duration::from_millis(1100);
const DEPARTING: Duration = Duration::from_millis(500);
const WALKING_TO_ELEVATOR: Duration = Duration::from_millis(1100);
const ELEVATOR_RIDE: Duration = Duration::from_millis(700);

/// What a backend state wants from the choreography.
///
/// Coarse intent only. The phase machine decides whether the intent applies
/// right now (a `Depart` lands only from `idle`; anything else latches via
/// the stored backend state and is re-read at the next settle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseFamily {
    /// Enter the floor (agent creation)
    Arrive,
    /// Head to the boss after entering (influences the ready-point branch)
    Report,
    /// Cut the entrance choreography short and settle at the desk
    Settle,
    /// Leave the floor
    Depart,
    /// Payload-only update, no choreography request
    Stay,
}

/// Map a backend state to the choreography it asks for.
pub fn desired_family(state: &BackendState) -> PhaseFamily {
    match state {
        BackendState::Arriving => PhaseFamily::Arrive,
        BackendState::Reporting => PhaseFamily::Report,
        BackendState::WalkingToDesk => PhaseFamily::Settle,
        BackendState::Completed | BackendState::Leaving | BackendState::InElevator => {
            PhaseFamily::Depart
        }
        BackendState::Working
        | BackendState::Thinking
        | BackendState::Waiting
        | BackendState::WaitingPermission
        | BackendState::ReportingDone
        | BackendState::Other(_) => PhaseFamily::Stay,
    }
}

/// How long a timed phase step runs before advancing. Queue phases and
/// `idle` wait on events instead and have no duration.
pub fn step_duration(phase: Phase) -> Option<Duration> {
    match phase {
        Phase::Arriving => Some(ARRIVING),
        Phase::WalkingToReady => Some(WALKING_TO_READY),
        Phase::Conversing => Some(CONVERSING),
        Phase::WalkingToBoss => Some(WALKING_TO_BOSS),
        Phase::AtBoss => Some(AT_BOSS),
        Phase::WalkingToDesk => Some(WALKING_TO_DESK),
        Phase::Departing => Some(DEPARTING),
        Phase::WalkingToElevator => Some(WALKING_TO_ELEVATOR),
        Phase::InElevator => Some(ELEVATOR_RIDE),
        Phase::Idle | Phase::InArrivalQueue | Phase::InDepartureQueue => None,
    }
}

/// Where the ready point leads: agents mid-report detour past the boss,
/// everyone else stops for a chat. Both paths converge on the desk.
pub fn ready_exit(state: &BackendState) -> Phase {
    if matches!(state, BackendState::Reporting) {
        Phase::WalkingToBoss
    } else {
        Phase::Conversing
    }
}

/// Backend states that wipe the speech bubble when the report carries no
/// tool call of its own.
pub fn clears_bubble(state: &BackendState) -> bool {
    matches!(
        state,
        BackendState::WalkingToDesk
            | BackendState::Leaving
            | BackendState::Completed
            | BackendState::Waiting
    )
}

#[cfg(test)]
#[path = "choreography_tests.rs"]
mod tests;
