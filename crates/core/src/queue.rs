// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Queue family names for the office waiting lines.

use serde::{Deserialize, Serialize};

/// The named FIFO lines on the floor.
///
/// `Arrival` and `Departure` hold agents waiting for an elevator slot on the
/// way in and out; `Elevator` tracks the standing order of agents riding the
/// car itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueFamily {
    Arrival,
    Departure,
    Elevator,
}

impl QueueFamily {
    pub const ALL: [QueueFamily; 3] =
        [QueueFamily::Arrival, QueueFamily::Departure, QueueFamily::Elevator];
}

crate::simple_display! {
    QueueFamily {
        Arrival => "arrival",
        Departure => "departure",
        Elevator => "elevator",
    }
}
