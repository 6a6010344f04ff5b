//! Priority frontier keyed on `(priority, insertion order)`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One queued spot. Ordering looks only at `priority` and `order`, never at
/// the spot itself.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Entry {
    pub(crate) priority: i32,
    pub(crate) order: u64,
    pub(crate) idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // and among equal priorities the earliest insertion.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Min-priority queue with strict FIFO tie-breaking.
///
/// Every push gets the next value of a monotonically increasing counter, so
/// the first entry ever pushed has order 0.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    counter: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, priority: i32, idx: usize) {
        self.heap.push(Entry {
            priority,
            order: self.counter,
            idx,
        });
        self.counter += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
