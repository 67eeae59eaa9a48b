// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The office floor: canonical agent records plus the reconciliation and
//! choreography machinery that moves them.
//!
//! One `Office` is the single writer for everything on the floor. Intake
//! events come through [`Office::handle_event`] on one serialized path and
//! come back out as [`Effect`]s; the presentational layer only ever sees
//! [`OfficeSnapshot`]s. The office itself never sleeps and never looks at a
//! clock. Callers stamp events with wall time and deliver timer expiries,
//! which keeps whole choreography cycles drivable from sync tests.

mod advance;
mod reconcile;

use crate::choreography;
use crate::config::FloorConfig;
use crate::queue::AdmissionController;
use crate::resources::ResourceRegistry;
use bullpen_core::{
    AgentId, BackendState, BossState, Effect, Event, Phase, SessionId, SessionStatus, TimerId,
};
use bullpen_wire::{AgentView, BossView, ElevatorDoors, HistoryEntry, OfficeSnapshot};
use std::collections::{HashMap, VecDeque};

/// Most recent history entries kept for the feed.
pub const HISTORY_LIMIT: usize = 500;

/// Display colors handed out round-robin by agent number.
const PALETTE: [&str; 8] = [
    "#3B82F6", "#22C55E", "#A855F7", "#F97316", "#EC4899", "#06B6D4", "#EAB308", "#EF4444",
];

/// One agent's canonical record.
#[derive(Debug, Clone)]
pub struct Agent {
    pub id: AgentId,
    /// Stable display ordinal, assigned at creation and never reused while
    /// the floor is live
    pub number: u32,
    pub name: String,
    pub color: String,
    /// Held desk; `Some` only while the phase is desk-resident
    pub desk: Option<u8>,
    /// Latest backend state, verbatim (unknown values included)
    pub backend_state: BackendState,
    pub phase: Phase,
    /// Bumped on every committed transition; stale timers compare against it
    pub epoch: u64,
    pub current_task: Option<String>,
    pub bubble: Option<String>,
    pub created_at_ms: u64,
    pub updated_at_ms: u64,
}

/// The boss fixture's own report payloads. Its displayed state is derived
/// from the floor, not stored.
#[derive(Debug, Clone, Default)]
struct BossRecord {
    state: Option<BackendState>,
    current_task: Option<String>,
    bubble: Option<String>,
}

/// The floor: agent registry, resource registry, admission queues, history.
pub struct Office {
    config: FloorConfig,
    session_id: Option<SessionId>,
    session_status: Option<SessionStatus>,
    agents: HashMap<AgentId, Agent>,
    boss: BossRecord,
    resources: ResourceRegistry,
    queues: AdmissionController,
    history: VecDeque<HistoryEntry>,
    next_number: u32,
    next_seq: u64,
}

impl Office {
    pub fn new(config: FloorConfig) -> Self {
        let config = config.normalized();
        let resources = ResourceRegistry::new(config.desks, config.elevator_capacity);
        Self {
            config,
            session_id: None,
            session_status: None,
            agents: HashMap::new(),
            boss: BossRecord::default(),
            resources,
            queues: AdmissionController::new(),
            history: VecDeque::new(),
            next_number: 1,
            next_seq: 0,
        }
    }

    /// Apply one intake event and return the effects it produced.
    ///
    /// `now_ms` stamps engine-originated history entries; report events carry
    /// their own timestamps.
    pub fn handle_event(&mut self, event: &Event, now_ms: u64) -> Vec<Effect> {
        match event {
            Event::Shutdown => Vec::new(),
            Event::TimerFired { id } => self.handle_timer(id),
            Event::SessionStarted { id } => self.handle_session_started(id, now_ms),
            Event::SessionEnded { id } => self.handle_session_ended(id, now_ms),
            Event::AgentReported { id, state, name, task, tool_call, at_ms } => self.handle_report(
                id,
                state,
                name.as_deref(),
                task.as_deref(),
                tool_call.as_deref(),
                *at_ms,
            ),
            Event::AgentRemoved { id } => self.handle_removed(id, now_ms),
        }
    }

    pub fn agent(&self, id: &AgentId) -> Option<&Agent> {
        self.agents.get(id)
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn config(&self) -> &FloorConfig {
        &self.config
    }

    /// Commit a phase transition: check the edge, bump the epoch, arm the
    /// step timer. Invalid requests are logged and dropped, never applied.
    pub(crate) fn commit(&mut self, id: &AgentId, next: Phase, effects: &mut Vec<Effect>) -> bool {
        let Some(agent) = self.agents.get_mut(id) else {
            return false;
        };
        if !agent.phase.permits(next) {
            tracing::warn!(
                agent = %id,
                from = %agent.phase,
                to = %next,
                "ignoring invalid phase transition"
            );
            return false;
        }

        let from = agent.phase;
        agent.phase = next;
        agent.epoch += 1;
        let epoch = agent.epoch;
        tracing::debug!(agent = %id, %from, to = %next, epoch, "phase transition");

        if let Some(duration) = choreography::step_duration(next) {
            effects.push(Effect::SetTimer { id: TimerId::phase_step(id, epoch), duration });
        }
        true
    }

    /// Append a feed entry, trimming to [`HISTORY_LIMIT`].
    pub(crate) fn push_history(
        &mut self,
        kind: &str,
        agent_id: Option<&AgentId>,
        summary: String,
        at_ms: u64,
    ) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.history.push_back(HistoryEntry {
            seq,
            kind: kind.to_string(),
            agent_id: agent_id.cloned(),
            summary,
            at_ms,
        });
        while self.history.len() > HISTORY_LIMIT {
            self.history.pop_front();
        }
    }

    /// Immutable view of the whole floor for the presentational layer.
    pub fn snapshot(&self) -> OfficeSnapshot {
        let mut agents: Vec<AgentView> = self
            .agents
            .values()
            .map(|agent| {
                let placement = self.queues.placement_of(&agent.id);
                AgentView {
                    id: agent.id.clone(),
                    number: agent.number,
                    name: agent.name.clone(),
                    color: agent.color.clone(),
                    desk: agent.desk,
                    backend_state: agent.backend_state.clone(),
                    phase: agent.phase,
                    queue_type: placement.map(|(family, _)| family),
                    queue_index: placement.map(|(_, index)| index),
                    current_task: agent.current_task.clone(),
                    bubble: agent.bubble.clone(),
                }
            })
            .collect();
        agents.sort_by_key(|view| view.number);

        OfficeSnapshot {
            session_id: self.session_id.clone(),
            session_status: self.session_status,
            desk_count: self.config.desks,
            elevator: self.elevator_doors(),
            boss: BossView {
                state: self.boss_state(),
                current_task: self.boss.current_task.clone(),
                bubble: self.boss.bubble.clone(),
            },
            agents,
            history: self.history.iter().cloned().collect(),
        }
    }

    /// The boss's displayed state, derived from the floor first and the
    /// boss's own reports second.
    fn boss_state(&self) -> BossState {
        if self.agents.values().any(|agent| agent.phase == Phase::AtBoss) {
            return BossState::Reviewing;
        }
        if self.agents.values().any(|agent| agent.phase.arrival_in_flight()) {
            return BossState::Delegating;
        }
        match self.boss.state {
            Some(BackendState::Working) | Some(BackendState::Thinking) => BossState::Working,
            Some(BackendState::WaitingPermission) => BossState::WaitingPermission,
            Some(BackendState::Completed) => BossState::Completing,
            _ => BossState::Idle,
        }
    }

    /// Door rendering for the car, by precedence: someone riding out beats
    /// someone walking up, which beats someone stepping in off the car.
    fn elevator_doors(&self) -> ElevatorDoors {
        let mut doors = ElevatorDoors::Closed;
        for agent in self.agents.values() {
            match agent.phase {
                Phase::InElevator => return ElevatorDoors::Departing,
                Phase::WalkingToElevator => doors = ElevatorDoors::Open,
                Phase::WalkingToReady if doors == ElevatorDoors::Closed => {
                    doors = ElevatorDoors::Arriving;
                }
                _ => {}
            }
        }
        doors
    }
}

#[cfg(test)]
#[path = "../office_tests/mod.rs"]
mod tests;
