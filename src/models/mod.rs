//! Core data records: players and lineups.

pub mod output;

use crate::cli::types::{PlayerId, Position};
use serde::Serialize;

/// One player entry from the roster pool.
///
/// Immutable once built. `positions` lists every slot the player is eligible
/// for; the same physical player never fills two slots of one lineup, which
/// is enforced by `id` rather than by name.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Salary cost in whole dollars.
    pub cost: u32,
    /// Projected fantasy points.
    pub points: f64,
    pub positions: Vec<Position>,
}

impl Player {
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        cost: u32,
        points: f64,
        positions: Vec<Position>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            cost,
            points,
            positions,
        }
    }
}

/// A complete, cap-compliant lineup: one player per required slot.
///
/// Only the search constructs lineups, and only once every slot is filled,
/// no player repeats, and the total cost is within the cap. Consumers read
/// it; nothing mutates it.
#[derive(Debug, Clone)]
pub struct Lineup {
    slots: Vec<(Position, Player)>,
    total_cost: u32,
    total_points: f64,
}

impl Lineup {
    pub(crate) fn from_slots(slots: Vec<(Position, Player)>) -> Self {
        let total_cost = slots.iter().map(|(_, p)| p.cost).sum();
        let total_points = slots.iter().map(|(_, p)| p.points).sum();
        Self {
            slots,
            total_cost,
            total_points,
        }
    }

    /// Slot assignments in traversal order.
    pub fn slots(&self) -> &[(Position, Player)] {
        &self.slots
    }

    pub fn total_cost(&self) -> u32 {
        self.total_cost
    }

    pub fn total_points(&self) -> f64 {
        self.total_points
    }

    /// Whether the given player already occupies a slot.
    pub fn contains(&self, id: PlayerId) -> bool {
        self.slots.iter().any(|(_, p)| p.id == id)
    }
}
