// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Choreography phases and the fixed transition graph.
//!
//! Phases are presentational: they describe where an agent is in the office
//! choreography, never what the backend thinks the agent is doing. The graph
//! has no reverse edges apart from the desk loop, so a started transition
//! can never be walked backwards by a later report.

use serde::{Deserialize, Serialize};

/// Where an agent is in the office choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// At rest at the desk (or just created, pre-arrival)
    Idle,
    /// Stepping off the elevator onto the floor
    Arriving,
    /// Waiting in line for the entry elevator slot
    InArrivalQueue,
    /// Crossing the floor to the ready point
    WalkingToReady,
    /// Brief chat at the ready point
    Conversing,
    /// Heading to the boss to report in
    WalkingToBoss,
    /// Reporting at the boss's desk
    AtBoss,
    /// Heading to the assigned desk
    WalkingToDesk,
    /// Packing up, about to leave
    Departing,
    /// Waiting in line for the exit elevator slot
    InDepartureQueue,
    /// Crossing the floor to the elevator
    WalkingToElevator,
    /// Riding the elevator out (last phase before removal)
    InElevator,
}

crate::simple_display! {
    Phase {
        Idle => "idle",
        Arriving => "arriving",
        InArrivalQueue => "in_arrival_queue",
        WalkingToReady => "walking_to_ready",
        Conversing => "conversing",
        WalkingToBoss => "walking_to_boss",
        AtBoss => "at_boss",
        WalkingToDesk => "walking_to_desk",
        Departing => "departing",
        InDepartureQueue => "in_departure_queue",
        WalkingToElevator => "walking_to_elevator",
        InElevator => "in_elevator",
    }
}

impl Phase {
    /// The phases reachable from this one. Everything not listed here is an
    /// invalid transition and gets ignored by the engine.
    pub fn successors(self) -> &'static [Phase] {
        match self {
            Phase::Idle => &[Phase::Arriving, Phase::Departing],
            Phase::Arriving => &[Phase::WalkingToReady, Phase::InArrivalQueue],
            Phase::InArrivalQueue => &[Phase::WalkingToReady],
            Phase::WalkingToReady => &[Phase::Conversing, Phase::WalkingToBoss],
            Phase::Conversing => &[Phase::WalkingToDesk],
            Phase::WalkingToBoss => &[Phase::AtBoss],
            Phase::AtBoss => &[Phase::WalkingToDesk],
            Phase::WalkingToDesk => &[Phase::Idle],
            Phase::Departing => &[Phase::WalkingToElevator, Phase::InDepartureQueue],
            Phase::InDepartureQueue => &[Phase::WalkingToElevator],
            Phase::WalkingToElevator => &[Phase::InElevator],
            // Exits the floor entirely; removal is not a phase.
            Phase::InElevator => &[],
        }
    }

    /// Whether `next` is a legal transition from this phase.
    pub fn permits(self, next: Phase) -> bool {
        self.successors().contains(&next)
    }

    /// Phases that advance on a timer rather than waiting for admission.
    pub fn is_timed(self) -> bool {
        !matches!(self, Phase::Idle | Phase::InArrivalQueue | Phase::InDepartureQueue)
    }

    /// Phases during which the agent may hold a desk.
    pub fn desk_resident(self) -> bool {
        matches!(self, Phase::WalkingToDesk | Phase::Idle)
    }

    /// Phases that sit in an admission queue waiting for the elevator.
    pub fn in_queue(self) -> bool {
        matches!(self, Phase::InArrivalQueue | Phase::InDepartureQueue)
    }

    /// Arrival choreography still in flight (used for boss presence).
    pub fn arrival_in_flight(self) -> bool {
        matches!(
            self,
            Phase::Arriving | Phase::InArrivalQueue | Phase::WalkingToReady | Phase::WalkingToBoss
        )
    }
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod tests;
