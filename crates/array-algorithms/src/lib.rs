//! # array-algorithms — Classic Sequence Algorithms for Rust
//!
//! Textbook searching, sorting and number-theory routines over integer
//! sequences, with a small fluent API for choosing an algorithm at runtime.
//!
//! ## What is included?
//!
//! | Family        | Functions                                                        |
//! |---------------|------------------------------------------------------------------|
//! | Search        | `binary_search`, `linear_search`, `contains`                     |
//! | Sort          | `bubble_sort`, `selection_sort`, `insertion_sort`, `merge_sort`, `quick_sort` |
//! | Number theory | `gcd`, `lcm`, `fibonacci`, `factorial` (plus `checked_*`)        |
//! | Aggregates    | `sum`, `average`, `min`, `max`, `reverse`                        |
//!
//! ## Quick Start
//!
//! ### Raw functions
//!
//! ```rust
//! use array_algorithms::prelude::*;
//!
//! let mut data = vec![64, 34, 25, 12, 22, 11, 90];
//! quick_sort(&mut data);
//! assert_eq!(data, [11, 12, 22, 25, 34, 64, 90]);
//!
//! let sorted: Vec<i32> = (1..=10).collect();
//! assert_eq!(binary_search(&sorted, &5), Some(4));
//! assert_eq!(binary_search(&sorted, &11), None);
//!
//! assert_eq!(gcd(36, 60), 12);
//! assert_eq!(lcm(36, 60), 180);
//! ```
//!
//! ### Fluent API
//!
//! ```rust
//! use array_algorithms::prelude::*;
//!
//! let model = Sorter::new()
//!     .method(Insertion)    // Any of Bubble, Selection, Insertion, Merge, Quick
//!     .skip_if_sorted()     // Leave sorted input untouched
//!     .build()?;
//!
//! let mut data = vec![3, 1, 2];
//! let outcome = model.sort(&mut data);
//! assert_eq!(data, [1, 2, 3]);
//! println!("{}", outcome);
//!
//! let search = Searcher::new().method(Binary).require_sorted().build()?;
//! assert_eq!(search.find(&data, &2)?.index, Some(1));
//! # Result::<(), AlgoError>::Ok(())
//! ```
//!
//! ## Sentinels, preconditions and overflow
//!
//! The raw functions never fail. Searches return `None` when the target is
//! absent, `binary_search` trusts that its input is sorted, and the raw
//! number-theory functions follow the host integer semantics on overflow.
//! The `checked_*` functions and the builders report these conditions as
//! [`AlgoError`](prelude::AlgoError) instead.
//!
//! ## Minimal Usage (no_std)
//!
//! ```toml
//! [dependencies]
//! array-algorithms = { version = "0.1", default-features = false }
//! ```
//!
//! Merge sort allocates, so `alloc` is still required.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - error type and sentinels.
mod primitives;

// Layer 2: Math - scalar number theory.
mod math;

// Layer 3: Algorithms - search, sort, aggregates.
mod algorithms;

// Layer 4: Engine - method dispatch, validation and execution.
mod engine;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::algorithms::aggregate::{average, max, min, reverse, sum};
    pub use crate::algorithms::search::{binary_search, contains, linear_search};
    pub use crate::algorithms::sort::{
        bubble_sort, insertion_sort, is_sorted, merge_sort, quick_sort, selection_sort,
    };
    pub use crate::api::{
        AlgoError, SearchBuilder as Searcher, SearchMethod::Binary, SearchMethod::Linear,
        SearchMethod, SearchModel, SearchOutcome, SortBuilder as Sorter, SortMethod::Bubble,
        SortMethod::Insertion, SortMethod::Merge, SortMethod::Quick, SortMethod::Selection,
        SortMethod, SortModel, SortOutcome,
    };
    pub use crate::math::number::{
        checked_factorial, checked_fibonacci, checked_gcd, checked_lcm, factorial, fibonacci,
        gcd, lcm,
    };
    pub use crate::primitives::sentinel::{NOT_FOUND, to_signed_index};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
