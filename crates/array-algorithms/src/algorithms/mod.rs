//! Layer 3: Algorithms
//!
//! This layer implements the sequence algorithms themselves: searching,
//! sorting and aggregates. The functions here are raw: preconditions are
//! documented, not checked, and absence is reported with sentinels. The
//! engine layer adds validation and dispatch on top.

// Binary and linear search.
pub mod search;

// In-place comparison sorts.
pub mod sort;

// Sum, average, extrema and reversal.
pub mod aggregate;
