//! Random terrain generation.

use rand::{Rng, RngExt};

use crate::geom::Pos;
use crate::grid::Grid;
use crate::terrain::{CostTable, Terrain};

/// Relative frequencies used by [`TerrainGen::new`]: mostly cheap ground with
/// the occasional stone or water cell.
pub const DEFAULT_WEIGHTS: [(Terrain, u32); 6] = [
    (Terrain::Road, 4),
    (Terrain::Grass, 4),
    (Terrain::Mud, 2),
    (Terrain::Dune, 2),
    (Terrain::Water, 1),
    (Terrain::Stone, 1),
];

/// Random terrain generator with weighted terrain choice.
pub struct TerrainGen<R: Rng> {
    rng: R,
    weights: Vec<(Terrain, u32)>,
    total: u32,
}

impl<R: Rng> TerrainGen<R> {
    /// Create a generator using [`DEFAULT_WEIGHTS`].
    pub fn new(rng: R) -> Self {
        Self::with_weights(rng, &DEFAULT_WEIGHTS)
    }

    /// Create a generator with custom weights. Zero weights are dropped; if
    /// nothing remains every cell becomes road.
    pub fn with_weights(rng: R, weights: &[(Terrain, u32)]) -> Self {
        let weights: Vec<_> = weights.iter().copied().filter(|&(_, w)| w > 0).collect();
        let total = weights.iter().map(|&(_, w)| w).sum();
        Self {
            rng,
            weights,
            total,
        }
    }

    /// Draw one terrain kind.
    pub fn pick(&mut self) -> Terrain {
        if self.total == 0 {
            return Terrain::Road;
        }
        let mut roll = self.rng.random_range(0..self.total);
        for &(t, w) in &self.weights {
            if roll < w {
                return t;
            }
            roll -= w;
        }
        Terrain::Road
    }

    /// Generate a `rows × cols` grid priced with `costs`.
    pub fn grid(&mut self, rows: i32, cols: i32, costs: &CostTable) -> Grid {
        Grid::from_fn(rows, cols, costs, |_| self.pick())
    }

    /// A uniformly random in-bounds position of `grid`. `None` for an empty
    /// grid.
    pub fn pos_in(&mut self, grid: &Grid) -> Option<Pos> {
        if grid.is_empty() {
            return None;
        }
        Some(Pos::new(
            self.rng.random_range(0..grid.rows()),
            self.rng.random_range(0..grid.cols()),
        ))
    }
}
