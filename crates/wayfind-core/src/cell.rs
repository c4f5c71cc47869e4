//! The [`Cell`] type: one priced position of a [`Grid`](crate::Grid).

use crate::geom::Pos;
use crate::terrain::Terrain;

/// A grid cell: its position, terrain kind and traversal cost.
///
/// Cells are only created by a [`Grid`](crate::Grid), which resolves the cost
/// from its [`CostTable`](crate::CostTable) once at construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Pos,
    terrain: Terrain,
    cost: i32,
}

impl Cell {
    #[inline]
    pub(crate) const fn new(pos: Pos, terrain: Terrain, cost: i32) -> Self {
        Self { pos, terrain, cost }
    }

    #[inline]
    pub const fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub const fn terrain(&self) -> Terrain {
        self.terrain
    }

    /// Cost charged for stepping onto this cell. Always at least 1.
    #[inline]
    pub const fn cost(&self) -> i32 {
        self.cost
    }
}
