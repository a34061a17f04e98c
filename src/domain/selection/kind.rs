//! The two named selection sets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which selection set an operation targets.
///
/// The storage key of each set is its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionKind {
    Favorites,
    Comparison,
}

impl SelectionKind {
    /// Key under which the set is persisted.
    pub fn storage_key(&self) -> &'static str {
        match self {
            SelectionKind::Favorites => "favorites",
            SelectionKind::Comparison => "comparison",
        }
    }
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.storage_key())
    }
}
