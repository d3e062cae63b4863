//! Remaining-cost estimate for the informed strategy.

use super::path::PathState;
use crate::table::DistanceTable;

/// How the informed strategy combines the path so far with [`heuristic`].
///
/// Both keys only order the frontier. The search still runs until the
/// frontier is empty, so the returned bottleneck is optimal either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeuristicMode {
    /// `f = g + h` with `g` the summed edge weights so far.
    ///
    /// A sum-based key guiding a max objective: it finds good tours early but
    /// is not a lower bound on the final bottleneck.
    #[default]
    Additive,

    /// `f = max(g, h)` with `g` the running bottleneck.
    ///
    /// A true lower bound on the bottleneck of any completion, since the
    /// next edge cannot be cheaper than the cheapest available one.
    Bottleneck,
}

impl HeuristicMode {
    /// Frontier key for `state` given its estimate `h`.
    pub fn estimate(self, state: &PathState, h: u64) -> u64 {
        match self {
            HeuristicMode::Additive => state.distance().saturating_add(h),
            HeuristicMode::Bottleneck => state.bottleneck().max(h),
        }
    }
}

/// Minimum edge weight from `current` to any location in `remaining` other
/// than `current` itself, or 0 if there is none.
///
/// The informed strategy passes the candidate set of the parent being
/// expanded as `remaining`.
pub fn heuristic<L>(table: &DistanceTable<L>, remaining: &[usize], current: usize) -> u64 {
    remaining
        .iter()
        .filter(|&&c| c != current)
        .map(|&c| table.lookup(current, c))
        .min()
        .unwrap_or(0)
}
