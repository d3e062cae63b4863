//! Frontier disciplines.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use crate::state::PathState;

/// Pending states of one search run.
pub(crate) trait Frontier {
    /// Adds a state. `priority` is ignored by disciplines without one.
    fn push(&mut self, state: PathState, priority: u64);

    /// Removes the next state to process.
    fn pop(&mut self) -> Option<PathState>;

    fn len(&self) -> usize;
}

/// First-in first-out queue.
#[derive(Debug, Default)]
pub(crate) struct FifoFrontier {
    queue: VecDeque<PathState>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, state: PathState, _priority: u64) {
        self.queue.push_back(state);
    }

    fn pop(&mut self) -> Option<PathState> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Heap entry ordered by `(priority, sequence)`.
#[derive(Debug)]
struct Entry {
    priority: u64,
    state: PathState,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.state.sequence().cmp(other.state.sequence()))
    }
}

/// Min-priority queue; the lowest `(priority, sequence)` pops first.
#[derive(Debug, Default)]
pub(crate) struct PriorityFrontier {
    heap: BinaryHeap<Reverse<Entry>>,
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, state: PathState, priority: u64) {
        self.heap.push(Reverse(Entry { priority, state }));
    }

    fn pop(&mut self) -> Option<PathState> {
        self.heap.pop().map(|Reverse(entry)| entry.state)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
