use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_core::Point;

/// Frontier entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// lowest score first and, among equal scores, the earliest insertion.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Entry {
    pub(crate) pos: Point,
    pub(crate) score: f64,
    seq: u64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Stable min-priority queue of cells keyed by score.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }

    pub(crate) fn push(&mut self, pos: Point, score: f64) {
        self.heap.push(Entry {
            pos,
            score,
            seq: self.seq,
        });
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
