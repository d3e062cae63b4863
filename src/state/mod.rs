//! Path states and the operations every search strategy shares.
//!
//! - [`PathState`]: an ordered sequence of visited locations plus its running
//!   bottleneck (the largest edge weight crossed so far).
//! - [`is_goal`]: whether a state is a complete Hamiltonian cycle.
//! - [`expand`]: the successor generator. It only allows a return to the
//!   start once every location has been visited.
//! - [`heuristic`]: the lower-bound estimate used by the informed strategy.

mod heuristic;
mod path;

pub use heuristic::{heuristic, HeuristicMode};
pub use path::{candidates, expand, is_goal, PathState};
