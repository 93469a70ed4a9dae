//! Roster index: the player pool grouped by eligible position.

use crate::cli::types::Position;
use crate::models::Player;
use std::collections::BTreeMap;

/// The validated player pool, grouped once per run by eligible position.
///
/// Every position in [`Position::ALL`] gets an entry at build time, so an
/// absent-position lookup is a defined empty-slice case rather than a
/// special case. Read-only after construction; pool order preserves the
/// input order, which fixes the search's candidate-traversal order.
#[derive(Debug)]
pub struct RosterIndex {
    pools: BTreeMap<Position, Vec<Player>>,
}

impl RosterIndex {
    /// Group players under each of their eligible positions.
    ///
    /// A multi-position player appears in several pools but keeps a single
    /// identity; the search never places it in two slots of one lineup.
    pub fn build(players: &[Player]) -> Self {
        let mut pools: BTreeMap<Position, Vec<Player>> =
            Position::ALL.iter().map(|&p| (p, Vec::new())).collect();
        for player in players {
            for &position in &player.positions {
                if let Some(pool) = pools.get_mut(&position) {
                    pool.push(player.clone());
                }
            }
        }
        Self { pools }
    }

    /// Players eligible at the given position, in input order.
    pub fn lookup(&self, position: Position) -> &[Player] {
        self.pools
            .get(&position)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Cheapest salary in the position's pool; `None` if the pool is empty.
    pub fn min_cost(&self, position: Position) -> Option<u32> {
        self.lookup(position).iter().map(|p| p.cost).min()
    }

    /// Highest projected points in the position's pool; `None` if empty.
    pub fn max_points(&self, position: Position) -> Option<f64> {
        self.lookup(position)
            .iter()
            .map(|p| p.points)
            .fold(None, |acc, pts| match acc {
                Some(best) if best >= pts => Some(best),
                _ => Some(pts),
            })
    }
}
