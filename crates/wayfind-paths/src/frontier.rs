//! Frontier containers shared by the searching strategies.
//!
//! Strategies hand the frontier one batch of discovered entries per
//! expansion. How the batch is merged decides the strategy's character:
//!
//! - [`Stack`]: the batch is stably sorted and placed in front of everything
//!   already queued.
//! - [`Queue`]: the batch is stably sorted and placed behind everything
//!   already queued.
//! - [`Ranked`]: the whole frontier stays ordered by key; equal keys leave
//!   in insertion order.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use wayfind_core::{Grid, Pos};

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// Ordering key of a frontier entry, also reported in the expansion trace.
pub(crate) trait Key: Copy + Ord {
    fn value(self) -> f64;
}

/// A floating-point key, totally ordered.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Score(pub(crate) f64);

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Key for Score {
    #[inline]
    fn value(self) -> f64 {
        self.0
    }
}

/// Accumulated cost first, then depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct CostDepth {
    pub(crate) g: i64,
    pub(crate) depth: u32,
}

impl Key for CostDepth {
    #[inline]
    fn value(self) -> f64 {
        self.g as f64
    }
}

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// A discovered candidate waiting for expansion.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Entry<K> {
    pub(crate) key: K,
    pub(crate) pos: Pos,
    pub(crate) parent: Option<Pos>,
    /// Cost accumulated before leaving `parent`: every cell on the way here,
    /// the start included, this cell excluded.
    pub(crate) g: i64,
    pub(crate) depth: u32,
}

impl<K: Key> Entry<K> {
    pub(crate) fn start(pos: Pos, key: K) -> Self {
        Self {
            key,
            pos,
            parent: None,
            g: 0,
            depth: 0,
        }
    }

    /// `g` of any entry discovered from this one.
    #[inline]
    pub(crate) fn next_g(&self, grid: &Grid) -> i64 {
        // Each cell adds at most i32::MAX, so i64 holds any path that fits
        // in memory.
        self.g + i64::from(grid[self.pos].cost())
    }

    /// An entry for `pos` discovered from this one.
    #[inline]
    pub(crate) fn child(&self, grid: &Grid, pos: Pos, key: K) -> Self {
        Self {
            key,
            pos,
            parent: Some(self.pos),
            g: self.next_g(grid),
            depth: self.depth + 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Frontiers
// ---------------------------------------------------------------------------

pub(crate) trait Frontier {
    type Key: Key;

    /// Merge one expansion's worth of entries, draining `batch`.
    fn push_batch(&mut self, batch: &mut Vec<Entry<Self::Key>>);

    fn pop(&mut self) -> Option<Entry<Self::Key>>;
}

/// Batches go in front: the most recent batch is expanded first.
pub(crate) struct Stack<K> {
    // Top of the stack is the end of the vector.
    entries: Vec<Entry<K>>,
}

impl<K: Key> Stack<K> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Key> Frontier for Stack<K> {
    type Key = K;

    fn push_batch(&mut self, batch: &mut Vec<Entry<K>>) {
        batch.sort_by(|a, b| a.key.cmp(&b.key));
        self.entries.extend(batch.drain(..).rev());
    }

    fn pop(&mut self) -> Option<Entry<K>> {
        self.entries.pop()
    }
}

/// Batches go behind: first discovered, first expanded.
pub(crate) struct Queue<K> {
    entries: VecDeque<Entry<K>>,
}

impl<K: Key> Queue<K> {
    pub(crate) fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }
}

impl<K: Key> Frontier for Queue<K> {
    type Key = K;

    fn push_batch(&mut self, batch: &mut Vec<Entry<K>>) {
        batch.sort_by(|a, b| a.key.cmp(&b.key));
        self.entries.extend(batch.drain(..));
    }

    fn pop(&mut self) -> Option<Entry<K>> {
        self.entries.pop_front()
    }
}

/// Heap slot ordered by `(key, seq)`.
struct Slot<K> {
    entry: Entry<K>,
    seq: u64,
}

impl<K: Key> PartialEq for Slot<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Key> Eq for Slot<K> {}

impl<K: Key> Ord for Slot<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key, and among
        // equal keys the earliest insertion.
        other
            .entry
            .key
            .cmp(&self.entry.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<K: Key> PartialOrd for Slot<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Globally ordered by key; ties leave in insertion order.
pub(crate) struct Ranked<K> {
    heap: BinaryHeap<Slot<K>>,
    seq: u64,
}

impl<K: Key> Ranked<K> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }
}

impl<K: Key> Frontier for Ranked<K> {
    type Key = K;

    fn push_batch(&mut self, batch: &mut Vec<Entry<K>>) {
        for entry in batch.drain(..) {
            self.heap.push(Slot {
                entry,
                seq: self.seq,
            });
            self.seq += 1;
        }
    }

    fn pop(&mut self) -> Option<Entry<K>> {
        self.heap.pop().map(|s| s.entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: f64, col: i32) -> Entry<Score> {
        Entry {
            key: Score(key),
            pos: Pos::new(0, col),
            parent: None,
            g: 0,
            depth: 0,
        }
    }

    fn drain<F: Frontier>(f: &mut F) -> Vec<i32> {
        std::iter::from_fn(|| f.pop()).map(|e| e.pos.col).collect()
    }

    #[test]
    fn stack_prepends_sorted_batches() {
        let mut s = Stack::new();
        s.push_batch(&mut vec![entry(3.0, 0), entry(1.0, 1)]);
        // Second batch lands in front even though its keys are larger.
        s.push_batch(&mut vec![entry(9.0, 2), entry(5.0, 3), entry(5.0, 4)]);
        assert_eq!(drain(&mut s), vec![3, 4, 2, 1, 0]);
    }

    #[test]
    fn queue_appends_sorted_batches() {
        let mut q = Queue::new();
        q.push_batch(&mut vec![entry(3.0, 0), entry(1.0, 1)]);
        q.push_batch(&mut vec![entry(0.5, 2), entry(-1.0, 3)]);
        assert_eq!(drain(&mut q), vec![1, 0, 3, 2]);
    }

    #[test]
    fn ranked_breaks_ties_by_insertion() {
        let mut r = Ranked::new();
        r.push_batch(&mut vec![entry(2.0, 0), entry(1.0, 1), entry(2.0, 2)]);
        r.push_batch(&mut vec![entry(2.0, 3), entry(1.0, 4)]);
        assert_eq!(drain(&mut r), vec![1, 4, 0, 2, 3]);
    }

    #[test]
    fn cost_depth_orders_by_cost_then_depth() {
        let a = CostDepth { g: 4, depth: 9 };
        let b = CostDepth { g: 5, depth: 1 };
        let c = CostDepth { g: 4, depth: 2 };
        let mut keys = vec![a, b, c];
        keys.sort();
        assert_eq!(keys, vec![c, a, b]);
    }

    #[test]
    fn batch_is_drained() {
        let mut q = Queue::new();
        let mut batch = vec![entry(1.0, 0)];
        q.push_batch(&mut batch);
        assert!(batch.is_empty());
    }
}
