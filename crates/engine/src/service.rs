// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The service loop: single consumer of the intake queue.
//!
//! One task owns the [`Office`] outright. Feeds and tooling talk to it
//! through a cloneable [`Handle`]; the presentational layer reads from a
//! `watch` channel that always holds the latest [`OfficeSnapshot`]. Timers
//! never leave the loop: the scheduler is polled between events and expiries
//! are dispatched on the same serialized path as everything else.

use crate::config::FloorConfig;
use crate::office::Office;
use crate::scheduler::Scheduler;
use bullpen_core::{AgentId, Clock, Effect, Event, SessionId};
use bullpen_wire::{AgentReport, OfficeSnapshot};
use std::collections::VecDeque;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, watch};

/// How long to park when no timer is armed. The loop wakes for intake
/// events regardless.
const IDLE_PARK: Duration = Duration::from_secs(3600);

/// Errors surfaced to intake callers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service loop is gone; nothing will read the intake queue.
    #[error("intake queue closed")]
    IntakeClosed,
}

/// Intake side of the service: cheap to clone, safe to share.
#[derive(Clone)]
pub struct Handle<C: Clock> {
    tx: mpsc::Sender<Event>,
    clock: C,
}

impl<C: Clock> Handle<C> {
    /// Feed one backend report into the floor.
    pub async fn report(&self, report: AgentReport) -> Result<(), ServiceError> {
        let fallback_ms = self.clock.epoch_ms();
        self.send(report.into_event(fallback_ms)).await
    }

    pub async fn remove_agent(&self, id: AgentId) -> Result<(), ServiceError> {
        self.send(Event::AgentRemoved { id }).await
    }

    pub async fn start_session(&self, id: SessionId) -> Result<(), ServiceError> {
        self.send(Event::SessionStarted { id }).await
    }

    pub async fn end_session(&self, id: SessionId) -> Result<(), ServiceError> {
        self.send(Event::SessionEnded { id }).await
    }

    /// Stop the service loop. Events queued ahead of the shutdown still
    /// apply.
    pub async fn shutdown(&self) -> Result<(), ServiceError> {
        self.send(Event::Shutdown).await
    }

    async fn send(&self, event: Event) -> Result<(), ServiceError> {
        self.tx.send(event).await.map_err(|_| ServiceError::IntakeClosed)
    }
}

/// The office floor service.
pub struct Service<C: Clock> {
    office: Office,
    scheduler: Scheduler,
    clock: C,
    rx: mpsc::Receiver<Event>,
    snapshot_tx: watch::Sender<OfficeSnapshot>,
}

impl<C: Clock> Service<C> {
    /// Build the service plus its intake handle and snapshot feed.
    pub fn new(
        config: FloorConfig,
        clock: C,
    ) -> (Self, Handle<C>, watch::Receiver<OfficeSnapshot>) {
        let office = Office::new(config);
        let (tx, rx) = mpsc::channel(office.config().intake_buffer);
        let (snapshot_tx, snapshot_rx) = watch::channel(office.snapshot());
        let service =
            Service { office, scheduler: Scheduler::new(), clock: clock.clone(), rx, snapshot_tx };
        let handle = Handle { tx, clock };
        (service, handle, snapshot_rx)
    }

    /// Run until shutdown (or until every handle is dropped).
    pub async fn run(mut self) {
        tracing::info!("office service started");
        loop {
            let deadline = self.scheduler.next_deadline();
            let sleep_for = deadline
                .map(|at| at.saturating_duration_since(self.clock.now()))
                .unwrap_or(IDLE_PARK);

            tokio::select! {
                received = self.rx.recv() => {
                    match received {
                        None | Some(Event::Shutdown) => {
                            tracing::info!("office service stopping");
                            break;
                        }
                        Some(event) => self.dispatch(event),
                    }
                }
                _ = tokio::time::sleep(sleep_for), if deadline.is_some() => {
                    for event in self.scheduler.fired_timers(self.clock.now()) {
                        self.dispatch(event);
                    }
                }
            }
            self.publish();
        }
    }

    /// Apply one event and everything it cascades into.
    fn dispatch(&mut self, event: Event) {
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            tracing::debug!(event = %event.log_summary(), "dispatch");
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

    fn publish(&self) {
        // Losing every watcher is fine; the floor keeps running.
        let _ = self.snapshot_tx.send(self.office.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bullpen_core::{BackendState, SystemClock};

    #[tokio::test]
    async fn reports_flow_through_to_the_snapshot() {
        let (service, handle, mut snapshots) = Service::new(FloorConfig::default(), SystemClock);
        let worker = tokio::spawn(service.run());

        handle.report(AgentReport::new("agt-1", "working")).await.unwrap();
        snapshots.changed().await.unwrap();

        let view = snapshots.borrow().clone();
        assert_eq!(view.agents.len(), 1);
        assert_eq!(view.agents[0].name, "Agent 1");
        assert_eq!(view.agents[0].backend_state, BackendState::Working);

        handle.shutdown().await.unwrap();
        worker.await.unwrap();
    }

    #[tokio::test]
    async fn shutdown_stops_the_loop() {
        let (service, handle, _snapshots) = Service::new(FloorConfig::default(), SystemClock);
        let worker = tokio::spawn(service.run());

        handle.shutdown().await.unwrap();
        worker.await.unwrap();

        let result = handle.remove_agent(AgentId::from_string("agt-1")).await;
        assert!(matches!(result, Err(ServiceError::IntakeClosed)));
    }
}
