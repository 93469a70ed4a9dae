//! Output models used for printing and JSON serialization.

use crate::cli::types::Position;
use crate::models::Lineup;
use serde::Serialize;

/// One slot assignment in presentation form.
#[derive(Debug, Serialize)]
pub struct LineupRow {
    pub position: Position,
    pub name: String,
    /// Salary cost in whole dollars.
    pub cost: u32,
    /// Projected fantasy points.
    pub points: f64,
}

/// A lineup flattened for presentation: ordered rows plus summary totals.
///
/// This structure is designed for easy JSON serialization and console
/// printing; it knows nothing about either medium.
#[derive(Debug, Serialize)]
pub struct LineupReport {
    pub rows: Vec<LineupRow>,
    pub total_cost: u32,
    pub total_points: f64,
}

/// Map a lineup into its presentation record. Pure; no side effects.
pub fn project(lineup: &Lineup) -> LineupReport {
    let rows = lineup
        .slots()
        .iter()
        .map(|(position, player)| LineupRow {
            position: *position,
            name: player.name.clone(),
            cost: player.cost,
            points: player.points,
        })
        .collect();
    LineupReport {
        rows,
        total_cost: lineup.total_cost(),
        total_points: lineup.total_points(),
    }
}
