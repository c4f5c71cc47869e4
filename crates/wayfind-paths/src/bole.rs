use wayfind_core::{Dir, Grid, Pos};

use crate::error::PathError;
use crate::frontier::{Ranked, Score};
use crate::heuristic::StraightLine;
use crate::search::{Search, SearchState};
use crate::traits::Strategy;

/// Best-first search guided by straight-line distance to the goal.
///
/// The distance from every cell to the goal is tabulated once per search.
/// Expanding a cell `p` with accumulated cost `g(p)` queues each unvisited
/// neighbour (up, down, left, right) with
///
/// ```text
/// g(n) = g(p) + cost(p)
/// f(n) = g(n) + h(p)
/// ```
///
/// where `h(p)` is the distance of the *parent* to the goal, not of `n`.
/// The frontier is ordered by `f`; equal `f` keys leave in insertion order.
///
/// Because every cost is at least 1 and neighbouring distances differ by at
/// most 1, `f` never decreases from one finalized cell to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bole;

impl Strategy for Bole {
    fn name(&self) -> &'static str {
        "bole"
    }

    fn search(&self, grid: &Grid, start: Pos, goal: Pos) -> Result<Search, PathError> {
        let state = SearchState::new(grid, start, goal)?;
        let h = StraightLine::new(grid, goal);
        let start_key = Score(h.at(start));
        state.run(self.name(), Ranked::new(), start_key, |st, entry, batch| {
            let grid = st.grid();
            let g = entry.next_g(grid);
            let f = g as f64 + h.at(entry.pos);
            for n in grid.neighbors_in(entry.pos, Dir::VERTICAL_FIRST)? {
                if st.is_visited(n) {
                    continue;
                }
                batch.push(entry.child(grid, n, Score(f)));
            }
            Ok(())
        })
    }
}
