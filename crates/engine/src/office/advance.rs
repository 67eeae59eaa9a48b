// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timer-driven phase advancement.
//!
//! Every timed phase arms a step timer on entry; when it fires the agent
//! moves one stop along its route. A timer whose epoch no longer matches the
//! agent's is stale and drops silently, so a transition that happened in the
//! meantime can never be double-applied.

use super::Office;
use crate::choreography::{self, PhaseFamily};
use crate::resources::Resource;
use bullpen_core::{AgentId, Effect, Event, Phase, QueueFamily, TimerId};

impl Office {
    /// Advance the agent a fired step timer belongs to.
    pub(crate) fn handle_timer(&mut self, id: &TimerId) -> Vec<Effect> {
        let mut effects = Vec::new();

        let Some((agent_id, epoch)) = id.as_phase_step() else {
            tracing::debug!(timer = %id, "ignoring unrecognized timer");
            return effects;
        };
        let (phase, current_epoch) = match self.agents.get(&agent_id) {
            Some(agent) => (agent.phase, agent.epoch),
            None => return effects,
        };
        if current_epoch != epoch {
            tracing::debug!(
                agent = %agent_id,
                armed = epoch,
                current = current_epoch,
                "dropping stale step timer"
            );
            return effects;
        }

        match phase {
            Phase::Arriving => self.gate_through_elevator(
                &agent_id,
                Phase::WalkingToReady,
                Phase::InArrivalQueue,
                QueueFamily::Arrival,
                &mut effects,
            ),
            Phase::WalkingToReady => {
                // Off the car and onto the floor; the slot frees here.
                self.resources.release(&Resource::Elevator, &agent_id);
                let exit = self
                    .agents
                    .get(&agent_id)
                    .map_or(Phase::Conversing, |agent| {
                        choreography::ready_exit(&agent.backend_state)
                    });
                self.commit(&agent_id, exit, &mut effects);
                self.pump_admissions(&mut effects);
            }
            Phase::WalkingToBoss => {
                self.commit(&agent_id, Phase::AtBoss, &mut effects);
            }
            Phase::Conversing | Phase::AtBoss => self.settle_to_desk(&agent_id, &mut effects),
            Phase::WalkingToDesk => {
                if self.commit(&agent_id, Phase::Idle, &mut effects) {
                    // A departure that arrived mid-walk latched on the stored
                    // backend state; it lands now that the agent is settled.
                    let wants_departure = self.agents.get(&agent_id).is_some_and(|agent| {
                        choreography::desired_family(&agent.backend_state) == PhaseFamily::Depart
                    });
                    if wants_departure {
                        self.begin_departure(&agent_id, &mut effects);
                    }
                }
            }
            Phase::Departing => self.gate_through_elevator(
                &agent_id,
                Phase::WalkingToElevator,
                Phase::InDepartureQueue,
                QueueFamily::Departure,
                &mut effects,
            ),
            Phase::WalkingToElevator => {
                if self.commit(&agent_id, Phase::InElevator, &mut effects) {
                    self.queues.enqueue(QueueFamily::Elevator, &agent_id);
                }
            }
            Phase::InElevator => {
                // Ride over; the agent exits through the removal path.
                effects.push(Effect::Emit { event: Event::AgentRemoved { id: agent_id.clone() } });
            }
            Phase::Idle | Phase::InArrivalQueue | Phase::InDepartureQueue => {
                tracing::debug!(agent = %agent_id, %phase, "step timer fired in an untimed phase");
            }
        }

        effects
    }

    /// Kick off the entrance choreography for a newly created agent.
    pub(crate) fn begin_arrival(&mut self, id: &AgentId, effects: &mut Vec<Effect>) {
        self.commit(id, Phase::Arriving, effects);
    }

    /// Start the exit choreography. The desk frees as soon as the agent
    /// stands up, not when it reaches the elevator.
    pub(crate) fn begin_departure(&mut self, id: &AgentId, effects: &mut Vec<Effect>) {
        if !self.commit(id, Phase::Departing, effects) {
            return;
        }
        if let Some(desk) = self.resources.desk_of(id) {
            self.resources.release(&Resource::Desk(desk), id);
        }
        if let Some(agent) = self.agents.get_mut(id) {
            agent.desk = None;
        }
    }

    /// Send the agent to its desk, claiming one on the way.
    pub(crate) fn settle_to_desk(&mut self, id: &AgentId, effects: &mut Vec<Effect>) {
        if self.commit(id, Phase::WalkingToDesk, effects) {
            self.claim_desk(id);
        }
    }

    /// Claim a free desk, preferring the one matching the agent's number.
    /// With every desk taken the agent stands; `desk` stays `None`.
    fn claim_desk(&mut self, id: &AgentId) {
        let Some(agent) = self.agents.get(id) else {
            return;
        };
        let preferred = ((agent.number - 1) % u32::from(self.config.desks)) as u8 + 1;
        let Some(number) = self.resources.free_desk(preferred) else {
            return;
        };
        if self.resources.try_acquire(&Resource::Desk(number), id) {
            if let Some(agent) = self.agents.get_mut(id) {
                agent.desk = Some(number);
            }
        }
    }

    /// Entry and exit both funnel through the elevator: take a slot if one
    /// is free, otherwise join the line and wait to be pumped in.
    fn gate_through_elevator(
        &mut self,
        id: &AgentId,
        granted: Phase,
        queued: Phase,
        family: QueueFamily,
        effects: &mut Vec<Effect>,
    ) {
        if self.resources.try_acquire(&Resource::Elevator, id) {
            if !self.commit(id, granted, effects) {
                self.resources.release(&Resource::Elevator, id);
            }
        } else if self.commit(id, queued, effects) {
            self.queues.enqueue(family, id);
        }
    }

    /// Hand freed elevator slots to whoever is waiting, departures before
    /// arrivals. Runs until no slot or no taker remains.
    pub(crate) fn pump_admissions(&mut self, effects: &mut Vec<Effect>) {
        while self.resources.available(&Resource::Elevator) > 0 {
            let (family, granted) = if self.queues.front(QueueFamily::Departure).is_some() {
                (QueueFamily::Departure, Phase::WalkingToElevator)
            } else if self.queues.front(QueueFamily::Arrival).is_some() {
                (QueueFamily::Arrival, Phase::WalkingToReady)
            } else {
                break;
            };
            let Some(id) = self.queues.dequeue_front(family) else {
                break;
            };
            if self.resources.try_acquire(&Resource::Elevator, &id)
                && !self.commit(&id, granted, effects)
            {
                self.resources.release(&Resource::Elevator, &id);
            }
        }
    }
}
