use wayfind_core::{Dir, Grid, Pos};

use crate::error::PathError;
use crate::frontier::{Score, Stack};
use crate::heuristic::local_cost;
use crate::search::{Search, SearchState};
use crate::traits::Strategy;

/// Greedy local-cost search.
///
/// Each expansion discovers every in-bounds neighbour (up, right, down,
/// left), tags it with the cost of that neighbour alone, sorts the batch by
/// that cost and places it in front of everything already queued. Visited
/// cells are discarded only when dequeued.
///
/// The ordering never looks at accumulated cost, so the result is usually
/// not the cheapest path; it tends to follow runs of cheap terrain wherever
/// they lead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aki;

impl Strategy for Aki {
    fn name(&self) -> &'static str {
        "aki"
    }

    fn search(&self, grid: &Grid, start: Pos, goal: Pos) -> Result<Search, PathError> {
        let state = SearchState::new(grid, start, goal)?;
        let start_key = Score(local_cost(grid, start));
        state.run(self.name(), Stack::new(), start_key, |st, entry, batch| {
            let grid = st.grid();
            for n in grid.neighbors_in(entry.pos, Dir::CLOCKWISE)? {
                batch.push(entry.child(grid, n, Score(local_cost(grid, n))));
            }
            Ok(())
        })
    }
}
