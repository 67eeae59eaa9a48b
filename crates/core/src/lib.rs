// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bullpen-core: vocabulary types for the Bullpen office floor.
//!
//! The crate holds the shared language of the system: agent identity and
//! backend states, choreography phases, queue families, intake events, the
//! effects a reconciliation pass can request, and the clock abstraction the
//! engine is tested against. No policy lives here.

pub mod macros;

pub mod agent;
pub mod boss;
pub mod clock;
pub mod effect;
pub mod event;
pub mod id;
pub mod phase;
pub mod queue;
pub mod session;
pub mod timer;

pub use agent::{AgentId, BackendState, BOSS_AGENT_ID};
pub use boss::BossState;
pub use clock::{Clock, FakeClock, SystemClock};
pub use effect::Effect;
pub use event::Event;
pub use id::short;
pub use phase::Phase;
pub use queue::QueueFamily;
pub use session::{SessionId, SessionStatus};
pub use timer::TimerId;
