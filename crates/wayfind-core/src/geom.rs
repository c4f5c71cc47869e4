//! Geometry primitives: [`Pos`] and [`Dir`].
//!
//! Positions are addressed as `(row, col)`: rows grow downward, columns grow
//! to the right, and `(0, 0)` is the top-left cell of a grid.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A grid position. Equality, hashing and ordering all go through the
/// `(row, col)` pair, so two positions are the same cell exactly when their
/// coordinates match.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Top-left corner (0, 0).
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The adjacent position one step in `dir`. No bounds are involved.
    #[inline]
    pub const fn step(self, dir: Dir) -> Self {
        let (drow, dcol) = dir.offset();
        self.shift(drow, dcol)
    }

    /// The four cardinal neighbours, clockwise from up (up, right, down, left).
    #[inline]
    pub fn neighbors_4(self) -> [Pos; 4] {
        Dir::CLOCKWISE.map(|d| self.step(d))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Pos {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Pos {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Pos {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Dir
// ---------------------------------------------------------------------------

/// One of the four cardinal movement directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    /// Clockwise from up. This is the order [`Grid::neighbors4`] yields.
    ///
    /// [`Grid::neighbors4`]: crate::Grid::neighbors4
    pub const CLOCKWISE: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

    /// Row offsets first, then column offsets.
    pub const VERTICAL_FIRST: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    /// `(drow, dcol)` of a single step.
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Right => (0, 1),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
        }
    }
}
