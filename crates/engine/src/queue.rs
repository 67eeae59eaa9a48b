// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Admission queues for the floor's choke points.
//!
//! Three FIFO lines keyed by [`QueueFamily`]: agents waiting to enter, agents
//! waiting to leave, and the standing order of riders inside the elevator
//! car. Positions are dense (0..len) and renumber immediately on any removal,
//! so a snapshot taken at any moment shows agents packed toward the front
//! with no gaps.

use bullpen_core::{AgentId, QueueFamily};
use std::collections::VecDeque;

/// FIFO admission lines, one per family.
#[derive(Debug, Default)]
pub struct AdmissionController {
    arrival: VecDeque<AgentId>,
    departure: VecDeque<AgentId>,
    elevator: VecDeque<AgentId>,
}

impl AdmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    fn line(&self, family: QueueFamily) -> &VecDeque<AgentId> {
        match family {
            QueueFamily::Arrival => &self.arrival,
            QueueFamily::Departure => &self.departure,
            QueueFamily::Elevator => &self.elevator,
        }
    }

    fn line_mut(&mut self, family: QueueFamily) -> &mut VecDeque<AgentId> {
        match family {
            QueueFamily::Arrival => &mut self.arrival,
            QueueFamily::Departure => &mut self.departure,
            QueueFamily::Elevator => &mut self.elevator,
        }
    }

    /// Append an agent to a line and return its position. Re-enqueueing an
    /// agent already in the line returns the existing position instead of
    /// double-booking.
    pub fn enqueue(&mut self, family: QueueFamily, agent: &AgentId) -> usize {
        let line = self.line_mut(family);
        if let Some(position) = line.iter().position(|queued| queued == agent) {
            return position;
        }
        line.push_back(agent.clone());
        line.len() - 1
    }

    /// Pop the head of a line.
    pub fn dequeue_front(&mut self, family: QueueFamily) -> Option<AgentId> {
        self.line_mut(family).pop_front()
    }

    /// Peek at the head of a line.
    pub fn front(&self, family: QueueFamily) -> Option<&AgentId> {
        self.line(family).front()
    }

    /// Position of an agent within one line.
    pub fn position_of(&self, family: QueueFamily, agent: &AgentId) -> Option<usize> {
        self.line(family).iter().position(|queued| queued == agent)
    }

    /// Which line an agent stands in, and where. An agent is never in more
    /// than one line at a time.
    pub fn placement_of(&self, agent: &AgentId) -> Option<(QueueFamily, usize)> {
        for family in QueueFamily::ALL {
            if let Some(position) = self.position_of(family, agent) {
                return Some((family, position));
            }
        }
        None
    }

    /// Remove an agent from one line, closing the gap behind it.
    pub fn remove(&mut self, family: QueueFamily, agent: &AgentId) -> bool {
        let line = self.line_mut(family);
        match line.iter().position(|queued| queued == agent) {
            Some(position) => {
                line.remove(position);
                true
            }
            None => false,
        }
    }

    /// Remove an agent from every line it appears in.
    pub fn remove_everywhere(&mut self, agent: &AgentId) {
        for family in QueueFamily::ALL {
            self.remove(family, agent);
        }
    }

    pub fn len(&self, family: QueueFamily) -> usize {
        self.line(family).len()
    }

    /// True when every line is empty.
    pub fn is_empty(&self) -> bool {
        self.arrival.is_empty() && self.departure.is_empty() && self.elevator.is_empty()
    }

    /// Front-to-back walk of one line.
    pub fn iter(&self, family: QueueFamily) -> impl Iterator<Item = &AgentId> {
        self.line(family).iter()
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
