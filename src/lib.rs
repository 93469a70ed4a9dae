//! Daily-Fantasy Basketball Lineup Optimizer Library
//!
//! Builds valid daily-fantasy basketball lineups from a player pool under
//! roster-slot and salary-cap constraints, and selects the optimum by
//! projected points.
//!
//! ## Features
//!
//! - **Roster Index**: player pool grouped once per run by eligible position
//! - **Lazy Search**: cap-pruned backtracking enumeration of every valid lineup
//! - **Branch and Bound**: integrated search + selection for the single best
//!   lineup, with an optional rayon split over the outermost slot
//! - **Deterministic Ranking**: points-first ordering with cost and
//!   first-seen tie-breaks
//! - **Roster Ingestion**: whitespace-delimited roster files with
//!   skip-and-warn partial-failure semantics
//!
//! ## Quick Start
//!
//! ```rust
//! use dfs_hoops::{search, select, Configuration, Player, PlayerId, Position, RosterIndex};
//!
//! # fn example() -> dfs_hoops::Result<()> {
//! let players = vec![
//!     Player::new(PlayerId::new(0), "Alice", 3000, 10.0, vec![Position::PG]),
//!     Player::new(PlayerId::new(1), "Bob", 3000, 8.0, vec![Position::SG]),
//!     Player::new(PlayerId::new(2), "Carl", 3000, 12.0, vec![Position::SF]),
//!     Player::new(PlayerId::new(3), "Dan", 3000, 9.0, vec![Position::PF]),
//!     Player::new(PlayerId::new(4), "Eve", 3000, 7.0, vec![Position::C]),
//! ];
//!
//! let index = RosterIndex::build(&players);
//! let config = Configuration::with_cap(20_000)?;
//! let best = select::best(search::search(&index, &config)).expect("feasible lineup");
//! assert_eq!(best.total_cost(), 15_000);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Set a salary cap to avoid passing it on every command:
//! ```bash
//! export DFS_HOOPS_SALARY_CAP=50000
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod roster;
pub mod search;
pub mod select;

// Re-export commonly used types
pub use cli::types::{PlayerId, Position};
pub use config::{Configuration, DEFAULT_SALARY_CAP, MAX_POSITIONS};
pub use error::{LineupError, Result};
pub use models::{Lineup, Player};
pub use roster::RosterIndex;

pub const SALARY_CAP_ENV_VAR: &str = "DFS_HOOPS_SALARY_CAP";
