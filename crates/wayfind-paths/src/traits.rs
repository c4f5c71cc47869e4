use wayfind_core::{Grid, Pos};

use crate::error::PathError;
use crate::path::Path;
use crate::search::Search;

/// A way of walking from one cell of a [`Grid`] to another.
pub trait Strategy {
    /// Short lowercase name, used in logs.
    fn name(&self) -> &'static str;

    /// Run the search and return the path together with the expansion trace.
    ///
    /// Fails only when `start` lies outside the grid (or on an internal
    /// consistency error). An unreachable goal, including one outside the
    /// grid, is `Ok` with `path == None`.
    fn search(&self, grid: &Grid, start: Pos, goal: Pos) -> Result<Search, PathError>;

    /// Compute the path from `start` to `goal`, both inclusive, or `None` if
    /// the goal cannot be reached.
    fn find_path(&self, grid: &Grid, start: Pos, goal: Pos) -> Result<Option<Path>, PathError> {
        Ok(self.search(grid, start, goal)?.path)
    }
}
