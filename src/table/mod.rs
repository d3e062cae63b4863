//! Distance table.
//!
//! A precomputed, immutable mapping from ordered location pairs to a
//! non-negative integer weight. Locations are addressed by their index in
//! the order supplied at construction; the location labels are kept only
//! for reporting.

mod matrix;

pub use matrix::DistanceTable;
