// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reconciliation of backend reports against the floor.
//!
//! Reports are coarse and can arrive in any order relative to the
//! choreography, so a report never teleports an agent: it updates the record
//! verbatim and at most *requests* a move. The phase machine applies the
//! request only where the graph permits it; everything else latches on the
//! stored backend state and is re-read when the agent next settles.

use super::{Agent, BossRecord, Office, PALETTE};
use crate::choreography::{self, PhaseFamily};
use crate::queue::AdmissionController;
use crate::resources::ResourceRegistry;
use bullpen_core::{
    AgentId, BackendState, Effect, Phase, SessionId, SessionStatus, TimerId, BOSS_AGENT_ID,
};

impl Office {
    /// Apply one backend report: create the agent if it is new, otherwise
    /// fold the payload into the record and kick the choreography it asks for.
    pub(crate) fn handle_report(
        &mut self,
        id: &AgentId,
        state: &BackendState,
        name: Option<&str>,
        task: Option<&str>,
        tool_call: Option<&str>,
        at_ms: u64,
    ) -> Vec<Effect> {
        let mut effects = Vec::new();

        // A report on a floor without a live session means we joined the
        // feed mid-stream: open an anonymous session first.
        if self.session_status != Some(SessionStatus::Active) {
            effects.extend(self.open_session(None, at_ms));
        }

        if id.as_str() == BOSS_AGENT_ID {
            self.reconcile_boss(state, task, tool_call, at_ms);
            return effects;
        }

        if !self.agents.contains_key(id) {
            if self.agents.len() >= self.config.max_agents as usize {
                tracing::warn!(
                    agent = %id,
                    cap = self.config.max_agents,
                    "agent cap reached, refusing new agent"
                );
                return effects;
            }

            let number = self.next_number;
            self.next_number += 1;
            let display_name =
                name.map_or_else(|| format!("Agent {number}"), str::to_string);
            let color = PALETTE[((number - 1) % PALETTE.len() as u32) as usize].to_string();
            tracing::info!(agent = %id, number, name = %display_name, "agent joined the floor");

            self.agents.insert(
                id.clone(),
                Agent {
                    id: id.clone(),
                    number,
                    name: display_name.clone(),
                    color,
                    desk: None,
                    backend_state: state.clone(),
                    phase: Phase::Idle,
                    epoch: 0,
                    current_task: task.map(str::to_string),
                    bubble: tool_call.map(str::to_string),
                    created_at_ms: at_ms,
                    updated_at_ms: at_ms,
                },
            );
            self.push_history(
                "agent:reported",
                Some(id),
                format!("{display_name} arrived"),
                at_ms,
            );
            self.begin_arrival(id, &mut effects);
            return effects;
        }

        let Some(agent) = self.agents.get_mut(id) else {
            return effects;
        };
        agent.backend_state = state.clone();
        if let Some(name) = name {
            agent.name = name.to_string();
        }
        if let Some(task) = task {
            agent.current_task = Some(task.to_string());
        }
        if let Some(tool_call) = tool_call {
            agent.bubble = Some(tool_call.to_string());
        } else if choreography::clears_bubble(state) {
            agent.bubble = None;
        }
        agent.updated_at_ms = at_ms;
        let phase = agent.phase;
        let summary = format!("{}: {state}", agent.name);
        self.push_history("agent:reported", Some(id), summary, at_ms);

        match choreography::desired_family(state) {
            // Departure only ever starts from rest; anywhere else it latches.
            PhaseFamily::Depart if phase == Phase::Idle => {
                self.begin_departure(id, &mut effects);
            }
            // Cut the conversation or boss visit short and head for the desk.
            PhaseFamily::Settle if matches!(phase, Phase::Conversing | Phase::AtBoss) => {
                self.settle_to_desk(id, &mut effects);
            }
            _ => {}
        }

        effects
    }

    /// Fold a boss report into the fixture record. The boss never walks the
    /// floor, so there is no choreography to kick.
    fn reconcile_boss(
        &mut self,
        state: &BackendState,
        task: Option<&str>,
        tool_call: Option<&str>,
        at_ms: u64,
    ) {
        self.boss.state = Some(state.clone());
        if let Some(task) = task {
            self.boss.current_task = Some(task.to_string());
        }
        if let Some(tool_call) = tool_call {
            self.boss.bubble = Some(tool_call.to_string());
        } else if choreography::clears_bubble(state) {
            self.boss.bubble = None;
        }
        self.push_history(
            "agent:reported",
            Some(&AgentId::from_string(BOSS_AGENT_ID)),
            format!("boss: {state}"),
            at_ms,
        );
    }

    /// Drop an agent from the floor, wherever it is in the choreography:
    /// pending timer cancelled, resources released, queue spots closed up.
    pub(crate) fn handle_removed(&mut self, id: &AgentId, now_ms: u64) -> Vec<Effect> {
        let Some(agent) = self.agents.remove(id) else {
            return Vec::new();
        };

        let mut effects = vec![Effect::CancelTimer { id: TimerId::phase_step(id, agent.epoch) }];
        for resource in self.resources.holdings_of(id) {
            self.resources.release(&resource, id);
        }
        self.queues.remove_everywhere(id);

        let summary = if agent.phase == Phase::InElevator {
            format!("{} left the office", agent.name)
        } else {
            format!("{} was removed", agent.name)
        };
        tracing::info!(agent = %id, phase = %agent.phase, "agent removed");
        self.push_history("agent:removed", Some(id), summary, now_ms);

        // Whatever the agent held may unblock a queue.
        self.pump_admissions(&mut effects);
        effects
    }

    pub(crate) fn handle_session_started(&mut self, id: &SessionId, now_ms: u64) -> Vec<Effect> {
        self.open_session(Some(id), now_ms)
    }

    /// Mark the session ended. The floor freezes as-is; in-flight walks
    /// finish, and the next report opens a fresh session.
    pub(crate) fn handle_session_ended(&mut self, id: &SessionId, now_ms: u64) -> Vec<Effect> {
        if self.session_id.as_ref() == Some(id) {
            self.session_status = Some(SessionStatus::Ended);
            self.push_history("session:ended", None, "session ended".to_string(), now_ms);
        } else {
            tracing::debug!(
                session = %id,
                "ignoring end for a session that does not own the floor"
            );
        }
        Vec::new()
    }

    /// Reset the floor for a session. Everything goes: agents, holdings,
    /// queues, history, numbering. Pending step timers are cancelled so the
    /// old floor cannot fire into the new one.
    fn open_session(&mut self, id: Option<&SessionId>, now_ms: u64) -> Vec<Effect> {
        let effects: Vec<Effect> = self
            .agents
            .values()
            .map(|agent| Effect::CancelTimer { id: TimerId::phase_step(&agent.id, agent.epoch) })
            .collect();

        self.agents.clear();
        self.boss = BossRecord::default();
        self.resources = ResourceRegistry::new(self.config.desks, self.config.elevator_capacity);
        self.queues = AdmissionController::new();
        self.history.clear();
        self.next_seq = 0;
        self.next_number = 1;

        let session = id.cloned().unwrap_or_else(SessionId::new);
        tracing::info!(session = %session, "session opened");
        self.push_history("session:started", None, format!("session {session} started"), now_ms);
        self.session_id = Some(session);
        self.session_status = Some(SessionStatus::Active);

        effects
    }
}
