//! Basketball position types and utilities.

use crate::error::LineupError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Daily-fantasy basketball roster positions.
///
/// Each lineup fills one slot per position; a player may be eligible for
/// more than one.
///
/// # Examples
///
/// ```rust
/// use dfs_hoops::Position;
///
/// let pg: Position = "pg".parse().unwrap();
/// assert_eq!(pg, Position::PG);
/// assert_eq!(pg.to_string(), "PG");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    PG,
    SG,
    SF,
    PF,
    C,
}

impl Position {
    /// All valid positions, in the fixed slot-traversal order.
    pub const ALL: [Position; 5] = [
        Position::PG,
        Position::SG,
        Position::SF,
        Position::PF,
        Position::C,
    ];
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::C => "C",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PG" => Ok(Position::PG),
            "SG" => Ok(Position::SG),
            "SF" => Ok(Position::SF),
            "PF" => Ok(Position::PF),
            "C" => Ok(Position::C),
            _ => Err(LineupError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_string_round_trip() {
        for pos in Position::ALL {
            let parsed: Position = pos.to_string().parse().unwrap();
            assert_eq!(parsed, pos);
        }

        // Lowercase input is accepted
        assert_eq!("sf".parse::<Position>().unwrap(), Position::SF);
        assert_eq!("c".parse::<Position>().unwrap(), Position::C);
    }

    #[test]
    fn test_invalid_position_rejected() {
        let err = "QB".parse::<Position>().unwrap_err();
        match err {
            LineupError::InvalidPosition { position } => assert_eq!(position, "QB"),
            other => panic!("Expected InvalidPosition, got {:?}", other),
        }
        assert!("".parse::<Position>().is_err());
    }

    #[test]
    fn test_all_covers_every_position_once() {
        assert_eq!(Position::ALL.len(), 5);
        for (i, a) in Position::ALL.iter().enumerate() {
            for b in &Position::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
