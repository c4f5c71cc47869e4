use wayfind_core::{Grid, Pos};

use crate::error::PathError;
use crate::frontier::{Entry, Frontier, Key};
use crate::path::Path;
use crate::reconstruct::{Parents, reconstruct};

/// One finalized cell, in the order the search finalized it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expansion {
    pub pos: Pos,
    /// The cell it was discovered from; `None` for the start.
    pub parent: Option<Pos>,
    /// Cost accumulated before leaving the parent (start included, this cell
    /// excluded).
    pub g: i64,
    /// The ordering key the entry was dequeued with. Its meaning depends on
    /// the strategy.
    pub key: f64,
    /// Number of moves from the start along the recorded parents.
    pub depth: u32,
}

/// Outcome of a search: the path, if any, and the expansion trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    pub path: Option<Path>,
    pub expansions: Vec<Expansion>,
}

impl Search {
    /// Whether the goal was reached.
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// Working state of one search invocation: visited set, parent relation and
/// trace. Created per call and consumed by [`run`](Self::run).
pub(crate) struct SearchState<'g> {
    grid: &'g Grid,
    start: Pos,
    goal: Pos,
    // Indexed by the row-major offset of (row, col).
    visited: Vec<bool>,
    parents: Parents,
    expansions: Vec<Expansion>,
}

impl<'g> SearchState<'g> {
    /// Fails if `start` is outside the grid. The goal is only ever compared
    /// against, so it may lie anywhere.
    pub(crate) fn new(grid: &'g Grid, start: Pos, goal: Pos) -> Result<Self, PathError> {
        grid.check(start)?;
        Ok(Self {
            grid,
            start,
            goal,
            visited: vec![false; grid.len()],
            parents: Parents::new(grid),
            expansions: Vec::new(),
        })
    }

    #[inline]
    pub(crate) fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Whether `pos` has been finalized.
    #[inline]
    pub(crate) fn is_visited(&self, pos: Pos) -> bool {
        self.grid.index_of(pos).is_some_and(|i| self.visited[i])
    }

    /// Drive `frontier` until the goal is dequeued or the frontier runs dry.
    ///
    /// Every dequeued entry whose cell is already visited is discarded. The
    /// first entry dequeued for a cell finalizes it and fixes its parent;
    /// `expand` then fills the batch of entries discovered from it.
    pub(crate) fn run<F, E>(
        mut self,
        name: &'static str,
        mut frontier: F,
        start_key: F::Key,
        mut expand: E,
    ) -> Result<Search, PathError>
    where
        F: Frontier,
        E: FnMut(&Self, &Entry<F::Key>, &mut Vec<Entry<F::Key>>) -> Result<(), PathError>,
    {
        let mut batch = vec![Entry::start(self.start, start_key)];
        frontier.push_batch(&mut batch);

        while let Some(entry) = frontier.pop() {
            let Some(i) = self.grid.index_of(entry.pos) else {
                continue;
            };
            if self.visited[i] {
                continue;
            }
            self.visited[i] = true;
            self.parents.record(entry.pos, entry.parent);
            self.expansions.push(Expansion {
                pos: entry.pos,
                parent: entry.parent,
                g: entry.g,
                key: entry.key.value(),
                depth: entry.depth,
            });
            log::trace!(
                "{name}: finalized {} (key {:.3}, g {})",
                entry.pos,
                entry.key.value(),
                entry.g
            );

            if entry.pos == self.goal {
                log::debug!(
                    "{name}: reached {} from {} after {} expansions",
                    self.goal,
                    self.start,
                    self.expansions.len()
                );
                let path = reconstruct(&self.parents, self.start, self.goal)?;
                return Ok(Search {
                    path: Some(path),
                    expansions: self.expansions,
                });
            }

            expand(&self, &entry, &mut batch)?;
            frontier.push_batch(&mut batch);
        }

        log::debug!(
            "{name}: {} unreachable from {} after {} expansions",
            self.goal,
            self.start,
            self.expansions.len()
        );
        Ok(Search {
            path: None,
            expansions: self.expansions,
        })
    }
}
