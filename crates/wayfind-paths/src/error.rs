use std::fmt;

use wayfind_core::{MapError, Pos};

/// Errors returned by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The search was asked to start outside the grid.
    OutOfBounds(MapError),
    /// Walking the recorded parents from the goal never reached the start.
    /// This means a strategy recorded its parents wrongly; it is never
    /// expected from the strategies in this crate.
    BrokenChain { at: Pos },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(e) => write!(f, "invalid search request: {e}"),
            Self::BrokenChain { at } => {
                write!(f, "parent chain broken at {at}: no recorded parent")
            }
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutOfBounds(e) => Some(e),
            Self::BrokenChain { .. } => None,
        }
    }
}

impl From<MapError> for PathError {
    fn from(e: MapError) -> Self {
        Self::OutOfBounds(e)
    }
}
