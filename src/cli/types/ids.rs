//! ID types for the lineup optimizer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for player identity.
///
/// Two distinct players may share a name, so lineup-uniqueness checks key on
/// a synthetic index assigned when the roster is loaded rather than on name
/// equality.
///
/// # Examples
///
/// ```rust
/// use dfs_hoops::PlayerId;
///
/// let id = PlayerId::new(7);
/// assert_eq!(id.as_usize(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub usize);

impl PlayerId {
    /// Create a new PlayerId from a usize value.
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the underlying usize value.
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
