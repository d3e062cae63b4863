//! Exhaustive search for the bottleneck (minimax) traveling salesman tour.
//!
//! Finds a Hamiltonian cycle that minimizes the *largest* single edge weight
//! it uses, rather than the total length. Three strategies enumerate the same
//! space of partial tours:
//!
//! - **Breadth-first**: FIFO enumeration.
//! - **Uniform-cost**: expands the lowest running bottleneck first.
//! - **Informed**: expands by path cost plus a minimum-edge estimate.
//!
//! # Architecture
//!
//! - [`table`]: validated, immutable distance table.
//! - [`state`]: path states, goal test, successor generation and heuristic.
//! - [`search`]: frontier disciplines, run configuration and results.
//!
//! # Examples
//!
//! ```
//! use u_minimax::search::{SearchConfig, SearchRunner, Strategy};
//! use u_minimax::table::DistanceTable;
//!
//! let table = DistanceTable::build(
//!     vec!["A", "B", "C", "D"],
//!     &[[0, 10, 15, 20], [10, 0, 35, 40], [15, 35, 0, 30], [20, 40, 30, 0]],
//! )?;
//!
//! for (strategy, result) in SearchRunner::run_all(&table, &SearchConfig::default())? {
//!     assert_eq!(result.best_bottleneck, 35, "{strategy}");
//! }
//! # Ok::<(), u_minimax::MinimaxError>(())
//! ```

pub mod error;
pub mod search;
pub mod state;
pub mod table;

pub use error::MinimaxError;
