//! Search execution loop shared by all strategies.
//!
//! # Algorithm
//!
//! 1. Seed the frontier with the singleton path at location 0
//! 2. Repeatedly pop one state according to the strategy's discipline:
//!    a. If it is a complete tour, keep it if its bottleneck is strictly
//!    better than the best so far; never expand it
//!    b. Otherwise expand it and push every successor
//! 3. Stop when the frontier is empty and return the best tour recorded.
//!    Cancellation and the time limit stop immediately; once the expansion
//!    budget is spent, remaining partial paths are dropped unexpanded but
//!    complete tours already on the frontier are still recorded
//!
//! The first complete tour popped is not necessarily optimal under the
//! max objective for any of the three orderings, so runs always continue
//! to exhaustion unless cut off externally.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, trace, warn};

use super::config::SearchConfig;
use super::frontier::{FifoFrontier, Frontier, PriorityFrontier};
use super::types::{SearchResult, Strategy, UNREACHABLE};
use crate::error::MinimaxError;
use crate::state::{expand, heuristic, is_goal, PathState};
use crate::table::DistanceTable;

/// Runs the search strategies over a [`DistanceTable`].
pub struct SearchRunner;

impl SearchRunner {
    /// Runs one strategy to completion.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_minimax::search::{SearchConfig, SearchRunner, Strategy};
    /// use u_minimax::table::DistanceTable;
    ///
    /// let table = DistanceTable::build(
    ///     vec!["A", "B", "C", "D"],
    ///     &[[0, 1, 4, 5], [1, 0, 2, 6], [4, 2, 0, 3], [5, 6, 3, 0]],
    /// )
    /// .unwrap();
    /// let result = SearchRunner::run(&table, Strategy::UniformCost, &SearchConfig::default()).unwrap();
    /// assert_eq!(result.best_bottleneck, 5);
    /// let tour = table.labels(result.best.as_deref().unwrap());
    /// assert_eq!(tour, vec![&"A", &"B", &"C", &"D", &"A"]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`MinimaxError::InvalidConfig`] if `config` fails validation.
    pub fn run<L>(
        table: &DistanceTable<L>,
        strategy: Strategy,
        config: &SearchConfig,
    ) -> Result<SearchResult, MinimaxError> {
        Self::run_with_cancel(table, strategy, config, None)
    }

    /// Runs one strategy with an optional cancellation flag.
    ///
    /// When the flag is raised the run stops and returns the best tour
    /// found so far with `cancelled` set.
    pub fn run_with_cancel<L>(
        table: &DistanceTable<L>,
        strategy: Strategy,
        config: &SearchConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult, MinimaxError> {
        config.validate().map_err(MinimaxError::InvalidConfig)?;
        Ok(Self::search(table, strategy, config, cancel.as_deref()))
    }

    /// Runs every strategy on the same table, in [`Strategy::ALL`] order.
    ///
    /// With the `parallel` feature the runs execute concurrently; each run
    /// is still sequential.
    pub fn run_all<L: Sync>(
        table: &DistanceTable<L>,
        config: &SearchConfig,
    ) -> Result<Vec<(Strategy, SearchResult)>, MinimaxError> {
        config.validate().map_err(MinimaxError::InvalidConfig)?;

        #[cfg(feature = "parallel")]
        let results: Vec<(Strategy, SearchResult)> = {
            use rayon::prelude::*;
            Strategy::ALL[..]
                .par_iter()
                .map(|&s| (s, Self::search(table, s, config, None)))
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let results: Vec<(Strategy, SearchResult)> = Strategy::ALL
            .iter()
            .map(|&s| (s, Self::search(table, s, config, None)))
            .collect();

        Ok(results)
    }

    pub(crate) fn search<L>(
        table: &DistanceTable<L>,
        strategy: Strategy,
        config: &SearchConfig,
        cancel: Option<&AtomicBool>,
    ) -> SearchResult {
        let n = table.len();
        if n <= 1 {
            debug!("{strategy}: {n} location(s), returning trivial tour");
            return SearchResult::trivial(n);
        }

        debug!(
            "{strategy}: searching {n} locations (max_expansions={}, time_limit_ms={:?})",
            config.max_expansions, config.time_limit_ms
        );

        match strategy {
            Strategy::BreadthFirst => drive(FifoFrontier::default(), table, strategy, config, cancel),
            Strategy::UniformCost | Strategy::Informed => {
                drive(PriorityFrontier::default(), table, strategy, config, cancel)
            }
        }
    }
}

impl Strategy {
    /// Solves `table` with this strategy, running to frontier exhaustion.
    ///
    /// ```
    /// use u_minimax::search::Strategy;
    /// use u_minimax::table::DistanceTable;
    ///
    /// let table = DistanceTable::indexed(&[[0, 3, 8], [3, 0, 5], [8, 5, 0]]).unwrap();
    /// for strategy in Strategy::ALL {
    ///     assert_eq!(strategy.solve(&table).best_bottleneck, 8);
    /// }
    /// ```
    pub fn solve<L>(self, table: &DistanceTable<L>) -> SearchResult {
        SearchRunner::search(table, self, &SearchConfig::default(), None)
    }
}

/// Frontier key for a successor of a state whose candidate set is
/// `siblings`.
fn priority<L>(
    strategy: Strategy,
    config: &SearchConfig,
    table: &DistanceTable<L>,
    child: &PathState,
    siblings: &[usize],
) -> u64 {
    match strategy {
        Strategy::BreadthFirst => 0,
        Strategy::UniformCost => child.bottleneck(),
        Strategy::Informed => {
            let h = heuristic(table, siblings, child.current());
            config.heuristic.estimate(child, h)
        }
    }
}

fn drive<F: Frontier, L>(
    mut frontier: F,
    table: &DistanceTable<L>,
    strategy: Strategy,
    config: &SearchConfig,
    cancel: Option<&AtomicBool>,
) -> SearchResult {
    let n = table.len();
    let start = Instant::now();
    let deadline = config.time_limit_ms.map(Duration::from_millis);

    let mut best: Option<Vec<usize>> = None;
    let mut best_bottleneck = UNREACHABLE;
    let mut cost_history = Vec::new();

    let mut expansions = 0usize;
    let mut goals_reached = 0usize;
    let mut cancelled = false;
    let mut exhausted = false;
    let mut skipped = 0usize;

    frontier.push(PathState::start(0), 0);
    let mut generated = 1usize;
    let mut peak_frontier = 1usize;

    loop {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            cancelled = true;
            warn!("{strategy}: cancelled with {} states pending", frontier.len());
            break;
        }
        if deadline.is_some_and(|limit| start.elapsed() >= limit) {
            warn!(
                "{strategy}: time limit reached after {expansions} expansions with {} states pending",
                frontier.len()
            );
            break;
        }

        let Some(state) = frontier.pop() else {
            exhausted = skipped == 0;
            break;
        };

        if is_goal(&state, n) {
            goals_reached += 1;
            if state.bottleneck() < best_bottleneck {
                best_bottleneck = state.bottleneck();
                trace!(
                    "{strategy}: improved bottleneck to {best_bottleneck} via {:?}",
                    state.sequence()
                );
                best = Some(state.into_sequence());
                cost_history.push(best_bottleneck);
            }
            continue;
        }

        // Past the budget, the frontier is only drained for complete tours.
        if config.max_expansions > 0 && expansions >= config.max_expansions {
            if skipped == 0 {
                warn!(
                    "{strategy}: expansion budget {} reached with {} states pending",
                    config.max_expansions,
                    frontier.len() + 1
                );
            }
            skipped += 1;
            continue;
        }

        expansions += 1;
        let successors = expand(&state, table);
        let siblings: Vec<usize> = match strategy {
            Strategy::Informed => successors.iter().map(PathState::current).collect(),
            _ => Vec::new(),
        };

        generated += successors.len();
        for child in successors {
            let key = priority(strategy, config, table, &child, &siblings);
            frontier.push(child, key);
        }
        peak_frontier = peak_frontier.max(frontier.len());
    }

    debug!(
        "{strategy}: bottleneck={} expansions={expansions} generated={generated} goals={goals_reached} peak_frontier={peak_frontier} skipped={skipped} exhausted={exhausted} in {:?}",
        if best.is_some() { best_bottleneck.to_string() } else { "none".into() },
        start.elapsed()
    );

    SearchResult {
        best,
        best_bottleneck,
        expansions,
        generated,
        goals_reached,
        peak_frontier,
        cost_history,
        exhausted,
        cancelled,
    }
}
