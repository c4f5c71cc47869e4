//! The [`Grid`] type: an immutable rectangle of priced [`Cell`]s.
//!
//! A grid is built once (from a closure, rows of terrain, or ASCII text) and
//! never mutated afterwards, so a `&Grid` can be shared freely between
//! searches, including searches running on other threads.

use std::fmt;
use std::ops::Index;

use crate::cell::Cell;
use crate::error::MapError;
use crate::geom::{Dir, Pos};
use crate::terrain::{CostTable, Terrain};

/// A `rows × cols` grid of [`Cell`]s stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid where every cell has the same terrain.
    pub fn filled(rows: i32, cols: i32, terrain: Terrain, costs: &CostTable) -> Self {
        Self::from_fn(rows, cols, costs, |_| terrain)
    }

    /// Create a grid by asking `f` for the terrain at every position, in
    /// row-major order. Negative dimensions are treated as zero.
    pub fn from_fn(
        rows: i32,
        cols: i32,
        costs: &CostTable,
        mut f: impl FnMut(Pos) -> Terrain,
    ) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        let mut cells = Vec::with_capacity(rows as usize * cols as usize);
        for row in 0..rows {
            for col in 0..cols {
                let pos = Pos::new(row, col);
                let terrain = f(pos);
                cells.push(Cell::new(pos, terrain, costs.cost(terrain)));
            }
        }
        Self { rows, cols, cells }
    }

    /// Create a grid from rows of terrain. Every row must have the same,
    /// non-zero length.
    pub fn from_rows<R: AsRef<[Terrain]>>(rows: &[R], costs: &CostTable) -> Result<Self, MapError> {
        let width = match rows.first() {
            Some(r) if !r.as_ref().is_empty() => r.as_ref().len(),
            _ => return Err(MapError::Empty),
        };
        for (i, r) in rows.iter().enumerate() {
            let found = r.as_ref().len();
            if found != width {
                return Err(MapError::Ragged {
                    row: i,
                    expected: width,
                    found,
                });
            }
        }
        Ok(Self::from_fn(rows.len() as i32, width as i32, costs, |p| {
            rows[p.row as usize].as_ref()[p.col as usize]
        }))
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `pos` lies inside the grid.
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row >= 0 && pos.col >= 0 && pos.row < self.rows && pos.col < self.cols
    }

    /// Row-major index of `pos`, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, pos: Pos) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some(pos.row as usize * self.cols as usize + pos.col as usize)
    }

    /// Reject positions outside the grid.
    pub fn check(&self, pos: Pos) -> Result<(), MapError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(MapError::OutOfBounds {
                pos,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// The cell at `pos`.
    pub fn cell(&self, pos: Pos) -> Result<&Cell, MapError> {
        self.check(pos)?;
        Ok(&self[pos])
    }

    /// Traversal cost of the cell at `pos`.
    pub fn cost(&self, pos: Pos) -> Result<i32, MapError> {
        self.cell(pos).map(Cell::cost)
    }

    /// Terrain kind of the cell at `pos`.
    pub fn terrain(&self, pos: Pos) -> Result<Terrain, MapError> {
        self.cell(pos).map(Cell::terrain)
    }

    /// In-bounds 4-connected neighbours of `pos`, clockwise from up. No
    /// wraparound.
    pub fn neighbors4(&self, pos: Pos) -> Result<impl Iterator<Item = Pos> + '_, MapError> {
        self.neighbors_in(pos, Dir::CLOCKWISE)
    }

    /// In-bounds neighbours of `pos`, enumerated in the given direction order.
    pub fn neighbors_in(
        &self,
        pos: Pos,
        order: [Dir; 4],
    ) -> Result<impl Iterator<Item = Pos> + '_, MapError> {
        self.check(pos)?;
        Ok(order
            .into_iter()
            .map(move |d| pos.step(d))
            .filter(move |&n| self.contains(n)))
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Number of cells with the given terrain.
    pub fn count(&self, terrain: Terrain) -> usize {
        self.cells.iter().filter(|c| c.terrain() == terrain).count()
    }
}

impl Index<Pos> for Grid {
    type Output = Cell;

    /// Panics when `pos` is outside the grid, like slice indexing.
    #[inline]
    fn index(&self, pos: Pos) -> &Cell {
        match self.index_of(pos) {
            Some(i) => &self.cells[i],
            None => panic!(
                "position {pos} is outside the {}x{} grid",
                self.rows, self.cols
            ),
        }
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders one symbol per cell, one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols.max(1) as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", c.terrain().symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn road3() -> Grid {
        Grid::filled(3, 3, Terrain::Road, &CostTable::default())
    }

    #[test]
    fn dimensions() {
        let g = Grid::filled(2, 5, Terrain::Grass, &CostTable::default());
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 5);
        assert_eq!(g.len(), 10);
        assert_eq!(g.count(Terrain::Grass), 10);
    }

    #[test]
    fn cells_know_their_position() {
        let g = road3();
        for row in 0..3 {
            for col in 0..3 {
                let p = Pos::new(row, col);
                assert_eq!(g[p].pos(), p);
            }
        }
    }

    #[test]
    fn cost_follows_table() {
        let costs = CostTable::default();
        let g = Grid::from_fn(2, 2, &costs, |p| {
            if p == Pos::new(1, 1) {
                Terrain::Stone
            } else {
                Terrain::Mud
            }
        });
        assert_eq!(g.cost(Pos::new(1, 1)), Ok(1000));
        assert_eq!(g.cost(Pos::new(0, 1)), Ok(5));
        assert_eq!(g.terrain(Pos::new(0, 0)), Ok(Terrain::Mud));
    }

    #[test]
    fn out_of_bounds_queries_fail() {
        let g = road3();
        let err = g.cost(Pos::new(3, 0)).unwrap_err();
        assert_eq!(
            err,
            MapError::OutOfBounds {
                pos: Pos::new(3, 0),
                rows: 3,
                cols: 3
            }
        );
        assert!(g.cell(Pos::new(0, -1)).is_err());
        assert!(g.neighbors4(Pos::new(-1, 0)).is_err());
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 grid")]
    fn index_out_of_bounds_panics() {
        let g = road3();
        let _cost = g[Pos::new(0, 3)].cost();
    }

    #[test]
    fn corner_has_two_neighbors() {
        let g = road3();
        let n: Vec<Pos> = g.neighbors4(Pos::new(0, 0)).unwrap().collect();
        assert_eq!(n, vec![Pos::new(0, 1), Pos::new(1, 0)]);
    }

    #[test]
    fn center_neighbors_clockwise() {
        let g = road3();
        let n: Vec<Pos> = g.neighbors4(Pos::new(1, 1)).unwrap().collect();
        assert_eq!(
            n,
            vec![
                Pos::new(0, 1),
                Pos::new(1, 2),
                Pos::new(2, 1),
                Pos::new(1, 0)
            ]
        );
    }

    #[test]
    fn vertical_first_order() {
        let g = road3();
        let n: Vec<Pos> = g
            .neighbors_in(Pos::new(1, 1), Dir::VERTICAL_FIRST)
            .unwrap()
            .collect();
        assert_eq!(
            n,
            vec![
                Pos::new(0, 1),
                Pos::new(2, 1),
                Pos::new(1, 0),
                Pos::new(1, 2)
            ]
        );
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        let g = Grid::filled(1, 1, Terrain::Road, &CostTable::default());
        assert_eq!(g.neighbors4(Pos::ORIGIN).unwrap().count(), 0);
    }

    #[test]
    fn from_rows_rejects_ragged() {
        use Terrain::*;
        let rows: Vec<Vec<Terrain>> = vec![vec![Road, Road], vec![Road]];
        let err = Grid::from_rows(&rows, &CostTable::default()).unwrap_err();
        assert_eq!(
            err,
            MapError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn from_rows_rejects_empty() {
        let rows: Vec<Vec<Terrain>> = Vec::new();
        assert_eq!(
            Grid::from_rows(&rows, &CostTable::default()),
            Err(MapError::Empty)
        );
    }

    #[test]
    fn display_renders_symbols() {
        use Terrain::*;
        let rows = [[Road, Water], [Mud, Dune]];
        let g = Grid::from_rows(&rows, &CostTable::default()).unwrap();
        assert_eq!(g.to_string(), "rw\nmd");
    }
}
