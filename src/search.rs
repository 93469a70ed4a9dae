//! Lineup construction: backtracking search over required roster slots.
//!
//! Two entry points share the same traversal and pruning rules:
//!
//! - [`search`] returns a lazy iterator over every valid lineup, in
//!   depth-first order (slots in configuration order, candidates in pool
//!   order). Restart by calling [`search`] again.
//! - [`Solver`] folds search and selection together: branch-and-bound with
//!   an incumbent best, plus an optional rayon split over the outermost
//!   slot's candidates. Its result is always identical to
//!   `select::best(search(..))`.
//!
//! Both prune a partial lineup as soon as its running cost plus the cheapest
//! possible completion exceeds the salary cap, rather than generating the
//! full cartesian product and filtering.

use crate::cli::types::Position;
use crate::config::Configuration;
use crate::models::{Lineup, Player};
use crate::roster::RosterIndex;
use crate::select;
use rayon::prelude::*;

/// Sum of the cheapest pool entry for each slot from `d` onward; used for
/// cap pruning. Index `n` is 0. Empty pools contribute 0, which is harmless:
/// the search dies at that slot before the bound matters.
fn min_cost_suffix(index: &RosterIndex, slots: &[Position]) -> Vec<u32> {
    let mut suffix = vec![0u32; slots.len() + 1];
    for d in (0..slots.len()).rev() {
        suffix[d] = suffix[d + 1] + index.min_cost(slots[d]).unwrap_or(0);
    }
    suffix
}

/// Sum of the highest-points pool entry for each slot from `d` onward; an
/// admissible upper bound on any completion's points.
fn max_points_suffix(index: &RosterIndex, slots: &[Position]) -> Vec<f64> {
    let mut suffix = vec![0f64; slots.len() + 1];
    for d in (0..slots.len()).rev() {
        suffix[d] = suffix[d + 1] + index.max_points(slots[d]).unwrap_or(0.0);
    }
    suffix
}

/// Enumerate every valid lineup lazily.
pub fn search<'a>(index: &'a RosterIndex, config: &'a Configuration) -> LineupSearch<'a> {
    LineupSearch::new(index, config)
}

/// Lazy depth-first enumeration of valid lineups.
///
/// Yields a lineup only once every slot is filled, no player repeats, and
/// the total cost is within the cap; partial lineups never escape. An empty
/// pool for any required slot simply yields an empty sequence.
pub struct LineupSearch<'a> {
    index: &'a RosterIndex,
    config: &'a Configuration,
    min_remaining: Vec<u32>,
    /// Next candidate index to try at each depth.
    cursors: Vec<usize>,
    chosen: Vec<&'a Player>,
    cost: u32,
    exhausted: bool,
}

impl<'a> LineupSearch<'a> {
    fn new(index: &'a RosterIndex, config: &'a Configuration) -> Self {
        let slots = config.required_positions();
        Self {
            index,
            config,
            min_remaining: min_cost_suffix(index, slots),
            cursors: vec![0; slots.len()],
            chosen: Vec::with_capacity(slots.len()),
            cost: 0,
            exhausted: false,
        }
    }

    fn backtrack(&mut self) {
        if let Some(player) = self.chosen.pop() {
            self.cost -= player.cost;
        }
    }
}

impl<'a> Iterator for LineupSearch<'a> {
    type Item = Lineup;

    fn next(&mut self) -> Option<Lineup> {
        if self.exhausted {
            return None;
        }
        let index = self.index;
        let config = self.config;
        let slots = config.required_positions();

        loop {
            let depth = self.chosen.len();

            if depth == slots.len() {
                let lineup = Lineup::from_slots(
                    slots
                        .iter()
                        .copied()
                        .zip(self.chosen.iter().map(|p| (*p).clone()))
                        .collect(),
                );
                self.backtrack();
                return Some(lineup);
            }

            let pool = index.lookup(slots[depth]);
            let mut advanced = false;
            while self.cursors[depth] < pool.len() {
                let candidate = &pool[self.cursors[depth]];
                self.cursors[depth] += 1;

                if self.chosen.iter().any(|p| p.id == candidate.id) {
                    continue;
                }
                if self.cost + candidate.cost + self.min_remaining[depth + 1]
                    > config.salary_cap()
                {
                    continue;
                }

                self.cost += candidate.cost;
                self.chosen.push(candidate);
                if depth + 1 < slots.len() {
                    self.cursors[depth + 1] = 0;
                }
                advanced = true;
                break;
            }

            if !advanced {
                if depth == 0 {
                    self.exhausted = true;
                    return None;
                }
                self.backtrack();
            }
        }
    }
}

/// Integrated search + selection with branch-and-bound pruning.
pub struct Solver<'a> {
    index: &'a RosterIndex,
    config: &'a Configuration,
    min_remaining: Vec<u32>,
    max_remaining: Vec<f64>,
}

impl<'a> Solver<'a> {
    pub fn new(index: &'a RosterIndex, config: &'a Configuration) -> Self {
        let slots = config.required_positions();
        Self {
            index,
            config,
            min_remaining: min_cost_suffix(index, slots),
            max_remaining: max_points_suffix(index, slots),
        }
    }

    /// Best lineup under the [`select::improves`] rule; `None` when no
    /// feasible lineup exists.
    pub fn solve(&self) -> Option<Lineup> {
        let mut best = None;
        let mut chosen = Vec::with_capacity(self.config.required_positions().len());
        self.descend(0, 0, 0.0, &mut chosen, &mut best);
        best
    }

    /// Like [`Solver::solve`], splitting the outermost slot's candidates
    /// across threads. Each subtree owns its partial state; partial bests
    /// merge in pool order under the same tie-break rule, so the result
    /// matches the sequential solve.
    pub fn solve_parallel(&self) -> Option<Lineup> {
        let slots = self.config.required_positions();
        let pool = self.index.lookup(slots[0]);

        let subtree_bests: Vec<Option<Lineup>> = pool
            .par_iter()
            .map(|candidate| {
                if candidate.cost + self.min_remaining[1] > self.config.salary_cap() {
                    return None;
                }
                let mut best = None;
                let mut chosen = Vec::with_capacity(slots.len());
                chosen.push(candidate);
                self.descend(1, candidate.cost, candidate.points, &mut chosen, &mut best);
                best
            })
            .collect();

        subtree_bests
            .into_iter()
            .flatten()
            .fold(None, |incumbent, lineup| match incumbent {
                Some(current) if !select::improves(&lineup, &current) => Some(current),
                _ => Some(lineup),
            })
    }

    fn descend(
        &self,
        depth: usize,
        cost: u32,
        points: f64,
        chosen: &mut Vec<&'a Player>,
        best: &mut Option<Lineup>,
    ) {
        // Prune only when the upper bound is strictly below the incumbent:
        // an equal-points completion could still win on cost.
        if let Some(incumbent) = best {
            if points + self.max_remaining[depth] < incumbent.total_points() {
                return;
            }
        }

        let slots = self.config.required_positions();
        if depth == slots.len() {
            let lineup = Lineup::from_slots(
                slots
                    .iter()
                    .copied()
                    .zip(chosen.iter().map(|p| (*p).clone()))
                    .collect(),
            );
            match best {
                Some(incumbent) if !select::improves(&lineup, incumbent) => {}
                _ => *best = Some(lineup),
            }
            return;
        }

        for candidate in self.index.lookup(slots[depth]) {
            if chosen.iter().any(|p| p.id == candidate.id) {
                continue;
            }
            if cost + candidate.cost + self.min_remaining[depth + 1] > self.config.salary_cap() {
                continue;
            }
            chosen.push(candidate);
            self.descend(
                depth + 1,
                cost + candidate.cost,
                points + candidate.points,
                chosen,
                best,
            );
            chosen.pop();
        }
    }
}
