//! Error type shared by table construction and search runs.

use thiserror::Error;

/// Errors reported before any search work begins.
///
/// The search itself cannot fail once it holds a validated
/// [`DistanceTable`](crate::table::DistanceTable); every failure mode is
/// detected up front.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MinimaxError {
    /// The distance matrix does not match the location set, or holds a
    /// negative weight.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A [`SearchConfig`](crate::search::SearchConfig) failed validation.
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),
}
