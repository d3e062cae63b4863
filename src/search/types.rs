//! Strategy selector and result record.

use std::fmt;

/// Bottleneck reported when no complete tour was found.
pub const UNREACHABLE: u64 = u64::MAX;

/// Frontier discipline used to order expansion.
///
/// | Strategy | Frontier | Key |
/// |---|---|---|
/// | `BreadthFirst` | FIFO queue | insertion order |
/// | `UniformCost` | min-heap | running bottleneck |
/// | `Informed` | min-heap | [`HeuristicMode::estimate`](crate::state::HeuristicMode::estimate) |
///
/// Heap ties are broken by comparing sequences lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Breadth-first enumeration.
    BreadthFirst,
    /// Uniform-cost search keyed on the running bottleneck.
    UniformCost,
    /// Heuristic-guided search.
    Informed,
}

impl Strategy {
    /// All strategies, in reporting order.
    pub const ALL: [Strategy; 3] = [
        Strategy::BreadthFirst,
        Strategy::UniformCost,
        Strategy::Informed,
    ];

    /// Short human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "breadth-first",
            Strategy::UniformCost => "uniform-cost",
            Strategy::Informed => "informed",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Best complete tour found, as location indices starting and ending at
    /// location 0. `None` if no tour was found.
    pub best: Option<Vec<usize>>,

    /// Bottleneck of `best`, or [`UNREACHABLE`] if there is none.
    pub best_bottleneck: u64,

    /// Number of non-goal states expanded.
    pub expansions: usize,

    /// Number of states pushed onto the frontier, including the seed.
    pub generated: usize,

    /// Number of complete tours popped from the frontier.
    pub goals_reached: usize,

    /// Largest frontier size observed.
    pub peak_frontier: usize,

    /// Best bottleneck after each strict improvement (non-increasing).
    pub cost_history: Vec<u64>,

    /// Whether the frontier was emptied without dropping any state
    /// unexpanded. Only then is `best` guaranteed optimal.
    pub exhausted: bool,

    /// Whether the run was stopped through its cancellation flag.
    pub cancelled: bool,
}

impl SearchResult {
    /// Result for inputs with at most one location: no edge is crossed.
    pub(crate) fn trivial(n: usize) -> Self {
        let best = if n == 0 { Vec::new() } else { vec![0, 0] };
        Self {
            best: Some(best),
            best_bottleneck: 0,
            expansions: 0,
            generated: 0,
            goals_reached: 0,
            peak_frontier: 0,
            cost_history: vec![0],
            exhausted: true,
            cancelled: false,
        }
    }

    /// Returns `true` if a complete tour was found.
    pub fn is_found(&self) -> bool {
        self.best.is_some()
    }
}
