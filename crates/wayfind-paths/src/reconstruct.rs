//! Parent recording and path reconstruction.

use wayfind_core::{Grid, Pos};

use crate::error::PathError;
use crate::path::Path;

/// How a finalized cell was reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Link {
    /// The search started here.
    Root,
    /// Discovered from the given cell.
    From(Pos),
}

/// The parent relation of one search: at most one [`Link`] per cell,
/// recorded when the cell is finalized.
#[derive(Debug, Clone)]
pub struct Parents {
    rows: i32,
    cols: i32,
    links: Vec<Option<Link>>,
}

impl Parents {
    /// An empty relation sized for `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            links: vec![None; grid.len()],
        }
    }

    #[inline]
    fn slot(&self, pos: Pos) -> Option<usize> {
        if pos.row < 0 || pos.col < 0 || pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        Some(pos.row as usize * self.cols as usize + pos.col as usize)
    }

    /// Record how `pos` was reached. The first record for a cell wins; later
    /// ones are ignored. Positions outside the grid are ignored.
    pub fn record(&mut self, pos: Pos, parent: Option<Pos>) {
        let Some(i) = self.slot(pos) else {
            return;
        };
        if self.links[i].is_none() {
            self.links[i] = Some(match parent {
                Some(p) => Link::From(p),
                None => Link::Root,
            });
        }
    }

    /// The recorded link of `pos`, if any.
    pub fn get(&self, pos: Pos) -> Option<Link> {
        self.slot(pos).and_then(|i| self.links[i])
    }

    /// Number of recorded cells.
    pub fn len(&self) -> usize {
        self.links.iter().filter(|l| l.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.links.iter().all(Option::is_none)
    }
}

/// Walk from `goal` back through `parents` to `start` and return the path in
/// walking order.
///
/// Fails with [`PathError::BrokenChain`] if a cell on the way has no recorded
/// parent, if the walk reaches a root other than `start`, or if it takes more
/// steps than there are cells (a cycle).
pub fn reconstruct(parents: &Parents, start: Pos, goal: Pos) -> Result<Path, PathError> {
    let mut cells = vec![goal];
    let mut cur = goal;
    while cur != start {
        if cells.len() > parents.links.len() {
            return Err(broken(cur));
        }
        match parents.get(cur) {
            Some(Link::From(p)) => {
                cells.push(p);
                cur = p;
            }
            Some(Link::Root) | None => return Err(broken(cur)),
        }
    }
    cells.reverse();
    Ok(Path::from_vec(cells))
}

fn broken(at: Pos) -> PathError {
    log::error!("parent chain broken at {at}");
    PathError::BrokenChain { at }
}
