use std::fmt;

use crate::geom::Pos;
use crate::terrain::Terrain;

/// Errors raised while building or querying a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A position outside the grid extents was queried.
    OutOfBounds { pos: Pos, rows: i32, cols: i32 },
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A map symbol that names no terrain kind.
    UnknownTerrain { ch: char, pos: Pos },
    /// A terrain name that names no terrain kind.
    UnknownKind(String),
    /// The map has no cells.
    Empty,
    /// Traversal costs must be at least 1.
    NonPositiveCost { terrain: Terrain, cost: i32 },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, rows, cols } => {
                write!(f, "position {pos} is outside the {rows}x{cols} grid")
            }
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "map row {row} has {found} cells, expected {expected}"
            ),
            Self::UnknownTerrain { ch, pos } => {
                write!(f, "unknown terrain symbol \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::UnknownKind(name) => write!(f, "unknown terrain kind \u{201c}{name}\u{201d}"),
            Self::Empty => write!(f, "map has no cells"),
            Self::NonPositiveCost { terrain, cost } => {
                write!(f, "cost of {terrain} must be positive, got {cost}")
            }
        }
    }
}

impl std::error::Error for MapError {}
