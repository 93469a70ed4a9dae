//! Ranking and selection over valid lineups.

use crate::models::Lineup;
use std::cmp::Ordering;

/// Whether `candidate` beats `incumbent` under the selection rule:
/// higher total points, ties by lower total cost, further ties keep the
/// incumbent (first-seen wins).
pub fn improves(candidate: &Lineup, incumbent: &Lineup) -> bool {
    match candidate
        .total_points()
        .partial_cmp(&incumbent.total_points())
        .unwrap_or(Ordering::Equal)
    {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => candidate.total_cost() < incumbent.total_cost(),
    }
}

/// Single-pass fold to the best lineup; `None` when the sequence is empty.
///
/// An empty result means no feasible lineup exists under the current
/// constraints, which is a normal reportable outcome.
pub fn best<I>(lineups: I) -> Option<Lineup>
where
    I: IntoIterator<Item = Lineup>,
{
    let mut incumbent: Option<Lineup> = None;
    for lineup in lineups {
        match &incumbent {
            Some(current) if !improves(&lineup, current) => {}
            _ => incumbent = Some(lineup),
        }
    }
    incumbent
}

/// The `k` best lineups under the same ordering as [`best`].
///
/// The sort is stable, so lineups tied on both points and cost stay in
/// traversal order.
pub fn top_k<I>(lineups: I, k: usize) -> Vec<Lineup>
where
    I: IntoIterator<Item = Lineup>,
{
    let mut all: Vec<Lineup> = lineups.into_iter().collect();
    all.sort_by(|a, b| {
        b.total_points()
            .partial_cmp(&a.total_points())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.total_cost().cmp(&b.total_cost()))
    });
    all.truncate(k);
    all
}
