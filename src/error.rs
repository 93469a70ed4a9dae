//! Error types for the lineup optimizer.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LineupError>;

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Failed to parse salary cap: {0}")]
    InvalidCap(#[from] std::num::ParseIntError),

    #[error("Salary cap must be positive")]
    NonPositiveCap,

    #[error("Expected {expected} roster slots, got {actual}")]
    SlotCount { expected: usize, actual: usize },
}
