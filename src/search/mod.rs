//! Exhaustive search for the bottleneck tour.
//!
//! Three strategies explore the same state space of partial tours and
//! differ only in the order the frontier is processed:
//!
//! - **Breadth-first**: FIFO queue.
//! - **Uniform-cost**: min-heap keyed on the running bottleneck.
//! - **Informed**: min-heap keyed on a path cost plus the
//!   [`heuristic`](crate::state::heuristic) estimate.
//!
//! Each run continues until the frontier is empty, which is what makes the
//! returned bottleneck optimal for all three. Ordering only changes how
//! quickly good tours are found.

mod config;
mod frontier;
mod runner;
mod types;

pub use crate::state::HeuristicMode;
pub use config::SearchConfig;
pub use runner::SearchRunner;
pub use types::{SearchResult, Strategy, UNREACHABLE};
