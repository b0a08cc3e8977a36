//! Trip search: narrowing the catalog to what the rider asked for.
//!
//! Filtering is a pure, stable narrowing: the output preserves the input
//! order and the input list is never modified.

mod criteria;

pub use criteria::TripFilter;
