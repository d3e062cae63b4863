//! Path state, goal test and successor generation.

use crate::table::DistanceTable;

/// A partial or complete tour.
///
/// States are never mutated: expanding a state produces fresh successors,
/// each one location longer than its parent.
///
/// Invariants maintained by construction:
/// - `sequence` is non-empty and `sequence[0]` is the start location;
/// - `bottleneck` is the largest weight among consecutive pairs
///   (0 for a singleton);
/// - `distance` is the sum of those weights. It only feeds the informed
///   strategy's ordering key and never the objective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathState {
    sequence: Vec<usize>,
    bottleneck: u64,
    distance: u64,
}

impl PathState {
    /// The singleton state at `start`.
    pub fn start(start: usize) -> Self {
        Self {
            sequence: vec![start],
            bottleneck: 0,
            distance: 0,
        }
    }

    /// Visited locations, in order.
    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// Largest edge weight crossed so far.
    pub fn bottleneck(&self) -> u64 {
        self.bottleneck
    }

    /// Sum of the edge weights crossed so far.
    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// The location the path currently ends at.
    pub fn current(&self) -> usize {
        self.sequence[self.sequence.len() - 1]
    }

    /// The location the path started from.
    pub fn origin(&self) -> usize {
        self.sequence[0]
    }

    /// Consumes the state, returning its sequence.
    pub fn into_sequence(self) -> Vec<usize> {
        self.sequence
    }

    fn extend(&self, next: usize, weight: u64) -> Self {
        let mut sequence = Vec::with_capacity(self.sequence.len() + 1);
        sequence.extend_from_slice(&self.sequence);
        sequence.push(next);
        Self {
            sequence,
            bottleneck: self.bottleneck.max(weight),
            distance: self.distance.saturating_add(weight),
        }
    }

    fn visited(&self, n: usize) -> Vec<bool> {
        let mut seen = vec![false; n];
        for &loc in &self.sequence {
            if loc < n {
                seen[loc] = true;
            }
        }
        seen
    }
}

/// Returns `true` if `state` is a complete Hamiltonian cycle over `n`
/// locations: `n + 1` entries, closing on the start, with the first `n`
/// entries covering every location exactly once.
pub fn is_goal(state: &PathState, n: usize) -> bool {
    let seq = state.sequence();
    if seq.len() != n + 1 || seq[n] != seq[0] {
        return false;
    }

    let mut seen = vec![false; n];
    for &loc in &seq[..n] {
        if loc >= n || seen[loc] {
            return false;
        }
        seen[loc] = true;
    }
    true
}

/// Valid next locations for `state`, in location order.
///
/// A location is valid if it has not been visited yet, or if it is the start
/// location and every location has already been visited. Complete states
/// have no candidates.
pub fn candidates(state: &PathState, n: usize) -> Vec<usize> {
    if is_goal(state, n) {
        return Vec::new();
    }

    let visited = state.visited(n);
    let all_visited = visited.iter().all(|&v| v);
    let origin = state.origin();

    (0..n)
        .filter(|&c| !visited[c] || (c == origin && all_visited))
        .collect()
}

/// Successor generator.
///
/// Emits one successor per [`candidates`] entry, in location order, with the
/// bottleneck raised by the weight of the new edge. Deterministic candidate
/// order gives reproducible tie-breaking in every strategy.
pub fn expand<L>(state: &PathState, table: &DistanceTable<L>) -> Vec<PathState> {
    let current = state.current();
    candidates(state, table.len())
        .into_iter()
        .map(|next| state.extend(next, table.lookup(current, next)))
        .collect()
}
