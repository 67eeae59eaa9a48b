// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bullpen-engine: reconciles backend agent reports into office choreography.
//!
//! The [`Office`] is the single writer: every mutation flows through its
//! `handle_event` on one serialized path, and everything the presentational
//! layer sees is a read-only [`bullpen_wire::OfficeSnapshot`]. The async
//! [`Service`] wraps the office with an intake queue and a timer wheel; the
//! office itself is synchronous and fully deterministic under a fake clock.

pub mod choreography;
pub mod config;
pub mod office;
pub mod queue;
pub mod resources;
pub mod scheduler;
pub mod service;

pub use choreography::PhaseFamily;
pub use config::{ConfigError, FloorConfig};
pub use office::Office;
pub use queue::AdmissionController;
pub use resources::{Resource, ResourceRegistry};
pub use scheduler::Scheduler;
pub use service::{Handle, Service, ServiceError};
