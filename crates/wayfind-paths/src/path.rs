use wayfind_core::{Grid, MapError, Pos};

/// An ordered walk from a start cell to a goal cell, both inclusive.
///
/// A path always has at least one cell; a search from a cell to itself yields
/// the single-cell path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Pos>", into = "Vec<Pos>"))]
pub struct Path {
    cells: Vec<Pos>,
}

impl Path {
    /// Build a path from its cells. `None` when `cells` is empty.
    pub fn new(cells: Vec<Pos>) -> Option<Self> {
        if cells.is_empty() {
            None
        } else {
            Some(Self { cells })
        }
    }

    #[inline]
    pub(crate) fn from_vec(cells: Vec<Pos>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    /// First cell.
    #[inline]
    pub fn start(&self) -> Pos {
        self.cells[0]
    }

    /// Last cell.
    #[inline]
    pub fn goal(&self) -> Pos {
        self.cells[self.cells.len() - 1]
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves: one less than the number of cells.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len() - 1
    }

    #[inline]
    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pos> {
        self.cells.iter()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }

    /// Total traversal cost on `grid`: every step pays the cost of the cell
    /// it enters, so the start cell is free.
    pub fn cost(&self, grid: &Grid) -> Result<i64, MapError> {
        self.cells[1..]
            .iter()
            .map(|&p| grid.cost(p).map(i64::from))
            .sum()
    }

    pub fn into_vec(self) -> Vec<Pos> {
        self.cells
    }
}

impl TryFrom<Vec<Pos>> for Path {
    type Error = &'static str;

    fn try_from(cells: Vec<Pos>) -> Result<Self, Self::Error> {
        Path::new(cells).ok_or("a path needs at least one cell")
    }
}

impl From<Path> for Vec<Pos> {
    fn from(p: Path) -> Self {
        p.cells
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Pos;
    type IntoIter = std::slice::Iter<'a, Pos>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_core::CostTable;

    fn walk() -> Path {
        Path::new(vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 1)]).unwrap()
    }

    #[test]
    fn endpoints_and_steps() {
        let p = walk();
        assert_eq!(p.start(), Pos::new(0, 0));
        assert_eq!(p.goal(), Pos::new(1, 1));
        assert_eq!(p.len(), 3);
        assert_eq!(p.steps(), 2);
        assert!(p.contains(Pos::new(0, 1)));
        assert!(!p.contains(Pos::new(1, 0)));
    }

    #[test]
    fn cost_charges_entered_cells() {
        let g = Grid::parse("sm\nrg", &CostTable::default()).unwrap();
        // Start on stone is free; mud 5 + grass 3.
        assert_eq!(walk().cost(&g), Ok(8));
    }

    #[test]
    fn cost_rejects_foreign_cells() {
        let g = Grid::parse("r", &CostTable::default()).unwrap();
        assert!(walk().cost(&g).is_err());
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(Path::new(Vec::new()), None);
    }
}
