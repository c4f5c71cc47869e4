//! Estimates used to order frontiers. None of them is a measured path cost.

use wayfind_core::{Grid, Pos};

/// Returned by [`neighbor_average`] when a cell has nothing around it to
/// average. Lower than any real cost, so such cells sort first.
pub const NO_ESTIMATE: f64 = -1.0;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Straight-line (L2) distance between two positions.
#[inline]
pub fn euclidean(a: Pos, b: Pos) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    (dr * dr + dc * dc).sqrt()
}

/// The traversal cost of `pos` itself.
///
/// Panics if `pos` is outside the grid.
#[inline]
pub fn local_cost(grid: &Grid, pos: Pos) -> f64 {
    f64::from(grid[pos].cost())
}

/// Average traversal cost of the in-bounds neighbours of `pos`, leaving out
/// `from` (the cell `pos` is being discovered from). [`NO_ESTIMATE`] when no
/// other neighbour exists.
///
/// Panics if `pos` is outside the grid.
pub fn neighbor_average(grid: &Grid, pos: Pos, from: Pos) -> f64 {
    let mut sum = 0i64;
    let mut count = 0u32;
    for n in pos.neighbors_4() {
        if n == from || !grid.contains(n) {
            continue;
        }
        sum += i64::from(grid[n].cost());
        count += 1;
    }
    if count == 0 {
        NO_ESTIMATE
    } else {
        sum as f64 / f64::from(count)
    }
}

/// Straight-line distance from every cell of a grid to one goal, computed
/// once per search.
#[derive(Debug, Clone)]
pub struct StraightLine {
    cols: i32,
    dist: Vec<f64>,
}

impl StraightLine {
    /// Tabulate the distance to `goal`. The goal need not lie inside the
    /// grid.
    pub fn new(grid: &Grid, goal: Pos) -> Self {
        let dist = grid.iter().map(|c| euclidean(c.pos(), goal)).collect();
        Self {
            cols: grid.cols(),
            dist,
        }
    }

    /// Distance from `pos` to the goal.
    ///
    /// Panics if `pos` is outside the tabulated grid.
    #[inline]
    pub fn at(&self, pos: Pos) -> f64 {
        self.dist[pos.row as usize * self.cols as usize + pos.col as usize]
    }
}
