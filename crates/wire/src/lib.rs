// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Boundary DTOs for the Bullpen engine.
//!
//! Two surfaces, both camelCase JSON: the inbound [`AgentReport`] the backend
//! feed delivers (transport is the embedder's business), and the outbound
//! [`OfficeSnapshot`] the presentational layer subscribes to.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod report;
mod snapshot;

pub use report::AgentReport;
pub use snapshot::{AgentView, BossView, ElevatorDoors, HistoryEntry, OfficeSnapshot};
