//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer turns the raw algorithms into configurable operations: it names
//! the algorithms, validates inputs and configuration, runs the selected
//! algorithm and reports what happened.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sort and search method selection.
pub mod method;

/// Input and configuration validation.
pub mod validator;

/// Configured execution of sorts and searches.
pub mod executor;

/// Outcome reports.
pub mod output;
