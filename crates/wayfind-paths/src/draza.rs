use wayfind_core::{Dir, Grid, Pos};

use crate::error::PathError;
use crate::frontier::{CostDepth, Ranked};
use crate::search::{Search, SearchState};
use crate::traits::Strategy;

/// Uniform-cost search; ties in accumulated cost go to the shallower entry.
///
/// Expanding a cell `p` queues each unvisited neighbour (up, down, left,
/// right) with `g(n) = g(p) + cost(p)` and `depth(n) = depth(p) + 1`. The
/// frontier is ordered by `(g, depth)`; full ties leave in insertion order.
///
/// Cost is charged when *leaving* a cell, so the start's cost is counted and
/// the goal's is not. Every path to the goal pays both the same way, which
/// keeps the result the cheapest path under [`Path::cost`](crate::Path::cost)
/// whenever the start and goal are fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Draza;

impl Strategy for Draza {
    fn name(&self) -> &'static str {
        "draza"
    }

    fn search(&self, grid: &Grid, start: Pos, goal: Pos) -> Result<Search, PathError> {
        let state = SearchState::new(grid, start, goal)?;
        let start_key = CostDepth { g: 0, depth: 0 };
        state.run(self.name(), Ranked::new(), start_key, |st, entry, batch| {
            let grid = st.grid();
            let key = CostDepth {
                g: entry.next_g(grid),
                depth: entry.depth + 1,
            };
            for n in grid.neighbors_in(entry.pos, Dir::VERTICAL_FIRST)? {
                if st.is_visited(n) {
                    continue;
                }
                batch.push(entry.child(grid, n, key));
            }
            Ok(())
        })
    }
}
