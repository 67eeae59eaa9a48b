// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Finite floor capacity: desks and the shared elevator.
//!
//! Grants are first-come-first-served. Acquire and release are both
//! idempotent so handlers can run them unconditionally: re-acquiring a held
//! resource is a no-op grant, releasing a resource the agent never held is a
//! no-op release.

use bullpen_core::AgentId;
use std::collections::BTreeMap;

/// A claimable unit of floor capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// A numbered desk (1-based)
    Desk(u8),
    /// One slot in the shared elevator car
    Elevator,
}

/// Tracks which agent holds which resource.
#[derive(Debug)]
pub struct ResourceRegistry {
    desks: BTreeMap<u8, Option<AgentId>>,
    elevator_capacity: usize,
    elevator: Vec<AgentId>,
}

impl ResourceRegistry {
    pub fn new(desk_count: u8, elevator_capacity: u8) -> Self {
        Self {
            desks: (1..=desk_count).map(|number| (number, None)).collect(),
            elevator_capacity: usize::from(elevator_capacity),
            elevator: Vec::new(),
        }
    }

    /// Attempt to claim a resource for an agent. Returns true on grant.
    pub fn try_acquire(&mut self, resource: &Resource, agent: &AgentId) -> bool {
        match resource {
            Resource::Desk(number) => match self.desks.get_mut(number) {
                None => false,
                Some(Some(holder)) => holder == agent,
                Some(slot) => {
                    *slot = Some(agent.clone());
                    true
                }
            },
            Resource::Elevator => {
                if self.elevator.contains(agent) {
                    return true;
                }
                if self.elevator.len() < self.elevator_capacity {
                    self.elevator.push(agent.clone());
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Drop an agent's hold on a resource. Returns true if a holding was
    /// actually released.
    pub fn release(&mut self, resource: &Resource, agent: &AgentId) -> bool {
        match resource {
            Resource::Desk(number) => match self.desks.get_mut(number) {
                Some(slot) if slot.as_ref() == Some(agent) => {
                    *slot = None;
                    true
                }
                _ => false,
            },
            Resource::Elevator => {
                let before = self.elevator.len();
                self.elevator.retain(|rider| rider != agent);
                self.elevator.len() != before
            }
        }
    }

    /// Total units a resource has (1 for any desk, car size for the elevator).
    pub fn capacity_of(&self, resource: &Resource) -> usize {
        match resource {
            Resource::Desk(number) => usize::from(self.desks.contains_key(number)),
            Resource::Elevator => self.elevator_capacity,
        }
    }

    /// Free units remaining.
    pub fn available(&self, resource: &Resource) -> usize {
        match resource {
            Resource::Desk(number) => match self.desks.get(number) {
                Some(None) => 1,
                _ => 0,
            },
            Resource::Elevator => self.elevator_capacity.saturating_sub(self.elevator.len()),
        }
    }

    /// Everything an agent currently holds.
    pub fn holdings_of(&self, agent: &AgentId) -> Vec<Resource> {
        let mut held = Vec::new();
        if let Some(number) = self.desk_of(agent) {
            held.push(Resource::Desk(number));
        }
        if self.elevator.contains(agent) {
            held.push(Resource::Elevator);
        }
        held
    }

    /// The desk an agent holds, if any.
    pub fn desk_of(&self, agent: &AgentId) -> Option<u8> {
        self.desks
            .iter()
            .find(|(_, slot)| slot.as_ref() == Some(agent))
            .map(|(number, _)| *number)
    }

    /// Pick a free desk, honoring the preferred number when it is open,
    /// otherwise the lowest-numbered free desk.
    pub fn free_desk(&self, preferred: u8) -> Option<u8> {
        if matches!(self.desks.get(&preferred), Some(None)) {
            return Some(preferred);
        }
        self.desks.iter().find(|(_, slot)| slot.is_none()).map(|(number, _)| *number)
    }

    /// Agents currently holding elevator slots, in grant order.
    pub fn elevator_occupants(&self) -> &[AgentId] {
        &self.elevator
    }
}

#[cfg(test)]
#[path = "resources_tests.rs"]
mod tests;
