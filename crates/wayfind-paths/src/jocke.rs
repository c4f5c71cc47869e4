use wayfind_core::{Dir, Grid, Pos};

use crate::error::PathError;
use crate::frontier::{Queue, Score};
use crate::heuristic::neighbor_average;
use crate::search::{Search, SearchState};
use crate::traits::Strategy;

/// Breadth-first search with a locally greedy tie-break.
///
/// Each expansion discovers the unvisited in-bounds neighbours (up, right,
/// down, left) and scores each one with [`neighbor_average`]: the mean cost
/// of the cells around it, not counting the cell it came from. The batch is
/// sorted by that score and appended to the back of a FIFO queue; the queue
/// itself is never reordered, so the search still proceeds level by level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jocke;

impl Strategy for Jocke {
    fn name(&self) -> &'static str {
        "jocke"
    }

    fn search(&self, grid: &Grid, start: Pos, goal: Pos) -> Result<Search, PathError> {
        let state = SearchState::new(grid, start, goal)?;
        state.run(self.name(), Queue::new(), Score(0.0), |st, entry, batch| {
            let grid = st.grid();
            for n in grid.neighbors_in(entry.pos, Dir::CLOCKWISE)? {
                if st.is_visited(n) {
                    continue;
                }
                let h = neighbor_average(grid, n, entry.pos);
                batch.push(entry.child(grid, n, Score(h)));
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::NO_ESTIMATE;
    use wayfind_core::{CostTable, Terrain};

    fn p(row: i32, col: i32) -> Pos {
        Pos::new(row, col)
    }

    #[test]
    fn uniform_grid() {
        let costs = CostTable::uniform(1).unwrap();
        let g = Grid::filled(3, 3, Terrain::Road, &costs);
        let path = Jocke.find_path(&g, p(0, 0), p(2, 2)).unwrap().unwrap();
        assert_eq!(
            path.cells(),
            &[p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)]
        );
    }

    #[test]
    fn expands_level_by_level() {
        let g = Grid::parse("rsrm\nwgdr\nrrmg", &CostTable::default()).unwrap();
        let s = Jocke.search(&g, p(0, 0), p(2, 3)).unwrap();
        let depths: Vec<u32> = s.expansions.iter().map(|e| e.depth).collect();
        assert!(depths.windows(2).all(|w| w[0] <= w[1]), "{depths:?}");
        // Breadth-first: the path is as short as possible.
        assert_eq!(s.path.unwrap().steps(), 5);
    }

    #[test]
    fn batch_sorted_by_surroundings() {
        // From (1,1): up (0,1) is surrounded by stone, down (2,1) by road.
        // s s s
        // r r r
        // r r r
        let g = Grid::parse("sss\nrrr\nrrr", &CostTable::default()).unwrap();
        let s = Jocke.search(&g, p(1, 1), p(2, 2)).unwrap();
        let order: Vec<Pos> = s.expansions.iter().take(5).map(|e| e.pos).collect();
        // up: stone, stone -> 1000; right: stone, road -> 501; down: road,
        // road -> 2; left: stone, road -> 501.
        assert_eq!(order, vec![p(1, 1), p(2, 1), p(1, 2), p(1, 0), p(0, 1)]);
    }

    #[test]
    fn dead_end_neighbor_gets_sentinel() {
        let g = Grid::filled(1, 2, Terrain::Dune, &CostTable::default());
        let s = Jocke.search(&g, p(0, 0), p(0, 1)).unwrap();
        assert_eq!(s.expansions[1].key, NO_ESTIMATE);
        assert_eq!(s.path.unwrap().cells(), &[p(0, 0), p(0, 1)]);
    }

    #[test]
    fn single_cell_grid() {
        let g = Grid::filled(1, 1, Terrain::Road, &CostTable::default());
        assert_eq!(Jocke.find_path(&g, p(0, 0), p(0, 1)), Ok(None));
        assert_eq!(
            Jocke.find_path(&g, p(0, 0), p(0, 0)).unwrap().unwrap().len(),
            1
        );
    }
}
