//! Type-safe wrappers and enums for lineup data.

pub mod ids;
pub mod position;

pub use ids::PlayerId;
pub use position::Position;
