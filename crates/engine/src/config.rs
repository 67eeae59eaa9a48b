// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Floor configuration
//!
//! Geometry and tuning knobs, loadable from a small TOML file. Every field
//! has a default so an empty file (or no file at all) yields a working floor.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Floor geometry and service tuning.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FloorConfig {
    /// Number of desks on the floor (desk numbers are 1-based)
    pub desks: u8,
    /// Elevator car slots; the floor is built around a scarce elevator, so
    /// this is clamped to 1..=4
    pub elevator_capacity: u8,
    /// Hard cap on simultaneously tracked agents; reports beyond it are
    /// refused at creation
    pub max_agents: u32,
    /// Intake channel depth for the service loop
    pub intake_buffer: usize,
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self { desks: 8, elevator_capacity: 1, max_agents: 8, intake_buffer: 256 }
    }
}

impl FloorConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: FloorConfig = toml::from_str(raw)?;
        Ok(config.normalized())
    }

    /// Clamp values into ranges the choreography can actually run with.
    pub(crate) fn normalized(mut self) -> Self {
        self.elevator_capacity = self.elevator_capacity.clamp(1, 4);
        self.desks = self.desks.max(1);
        self.max_agents = self.max_agents.max(1);
        self.intake_buffer = self.intake_buffer.max(1);
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
