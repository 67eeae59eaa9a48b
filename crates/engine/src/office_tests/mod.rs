// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Office floor tests

mod arrival;
mod departure;
mod removal;
mod reports;
mod session;
mod view;

use super::*;
use crate::scheduler::Scheduler;
use bullpen_core::{Clock, FakeClock};
use std::collections::VecDeque;

/// One office plus the scheduler and fake clock the service loop would own,
/// driven synchronously.
struct Floor {
    office: Office,
    scheduler: Scheduler,
    clock: FakeClock,
}

impl Floor {
    fn new() -> Self {
        Self::with_config(FloorConfig::default())
    }

    fn with_config(config: FloorConfig) -> Self {
        Self { office: Office::new(config), scheduler: Scheduler::new(), clock: FakeClock::new() }
    }

    /// Feed one event through the office the way the service loop would:
    /// emitted follow-ups cascade immediately, timer effects hit the
    /// scheduler.
    fn drive(&mut self, event: Event) {
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            let now_ms = self.clock.epoch_ms();
            for effect in self.office.handle_event(&event, now_ms) {
                match effect {
                    Effect::Emit { event } => queue.push_back(event),
                    Effect::SetTimer { id, duration } => {
                        self.scheduler.set_timer(id, duration, self.clock.now());
                    }
                    Effect::CancelTimer { id } => self.scheduler.cancel_timer(id.as_str()),
                }
            }
        }
    }

    /// Jump the clock to the next deadline and deliver everything due.
    /// Returns false once no timer remains armed.
    fn step(&mut self) -> bool {
        let Some(deadline) = self.scheduler.next_deadline() else {
            return false;
        };
        self.clock.advance(deadline.saturating_duration_since(self.clock.now()));
        for event in self.scheduler.fired_timers(self.clock.now()) {
            self.drive(event);
        }
        true
    }

    /// Run the choreography to quiescence.
    fn settle(&mut self) {
        while self.step() {}
    }

    fn report(&mut self, id: &str, state: &str) {
        let at_ms = self.clock.epoch_ms();
        self.drive(report_at(id, state, at_ms));
    }

    fn remove(&mut self, id: &str) {
        self.drive(Event::AgentRemoved { id: AgentId::from_string(id) });
    }

    fn agent(&self, id: &str) -> &Agent {
        self.office.agent(&AgentId::from_string(id)).expect("agent should be on the floor")
    }

    fn phase(&self, id: &str) -> Phase {
        self.agent(id).phase
    }

    fn snapshot(&self) -> OfficeSnapshot {
        self.office.snapshot()
    }
}

fn report_at(id: &str, state: &str, at_ms: u64) -> Event {
    Event::AgentReported {
        id: AgentId::from_string(id),
        state: BackendState::parse(state),
        name: None,
        task: None,
        tool_call: None,
        at_ms,
    }
}

fn detailed_report(
    id: &str,
    state: &str,
    name: Option<&str>,
    task: Option<&str>,
    tool_call: Option<&str>,
    at_ms: u64,
) -> Event {
    Event::AgentReported {
        id: AgentId::from_string(id),
        state: BackendState::parse(state),
        name: name.map(str::to_string),
        task: task.map(str::to_string),
        tool_call: tool_call.map(str::to_string),
        at_ms,
    }
}

fn session_started(id: &str) -> Event {
    Event::SessionStarted { id: SessionId::from_string(id) }
}

fn session_ended(id: &str) -> Event {
    Event::SessionEnded { id: SessionId::from_string(id) }
}
