//! Run configuration: salary cap and required roster slots.

use crate::cli::types::Position;
use crate::error::{LineupError, Result};

/// Number of roster slots in a complete lineup.
pub const MAX_POSITIONS: usize = 5;

/// Salary cap used when neither the flag nor the env var supplies one.
pub const DEFAULT_SALARY_CAP: u32 = 60_000;

/// Immutable run configuration.
///
/// Validated once at construction, before any search begins: the cap must be
/// positive and the required-slot list must have exactly [`MAX_POSITIONS`]
/// entries. Slot order fixes the search's traversal order.
#[derive(Debug, Clone)]
pub struct Configuration {
    salary_cap: u32,
    required_positions: Vec<Position>,
}

impl Configuration {
    /// Build a configuration, failing fast on an invalid cap or slot list.
    pub fn new(salary_cap: u32, required_positions: Vec<Position>) -> Result<Self> {
        if salary_cap == 0 {
            return Err(LineupError::NonPositiveCap);
        }
        if required_positions.len() != MAX_POSITIONS {
            return Err(LineupError::SlotCount {
                expected: MAX_POSITIONS,
                actual: required_positions.len(),
            });
        }
        Ok(Self {
            salary_cap,
            required_positions,
        })
    }

    /// Standard slots (one of each position) with the given cap.
    pub fn with_cap(salary_cap: u32) -> Result<Self> {
        Self::new(salary_cap, Position::ALL.to_vec())
    }

    pub fn salary_cap(&self) -> u32 {
        self.salary_cap
    }

    /// Required slots in traversal order.
    pub fn required_positions(&self) -> &[Position] {
        &self.required_positions
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            salary_cap: DEFAULT_SALARY_CAP,
            required_positions: Position::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert_eq!(config.salary_cap(), DEFAULT_SALARY_CAP);
        assert_eq!(config.required_positions(), &Position::ALL);
    }

    #[test]
    fn test_zero_cap_rejected() {
        let err = Configuration::with_cap(0).unwrap_err();
        assert!(matches!(err, LineupError::NonPositiveCap));
    }

    #[test]
    fn test_slot_count_mismatch_rejected() {
        let err = Configuration::new(50_000, vec![Position::PG, Position::C]).unwrap_err();
        match err {
            LineupError::SlotCount { expected, actual } => {
                assert_eq!(expected, MAX_POSITIONS);
                assert_eq!(actual, 2);
            }
            other => panic!("Expected SlotCount, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_slots_allowed() {
        // The required multiset may repeat a position as long as the size matches
        let slots = vec![Position::PG; MAX_POSITIONS];
        let config = Configuration::new(40_000, slots).unwrap();
        assert!(config
            .required_positions()
            .iter()
            .all(|&p| p == Position::PG));
    }
}
