//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure scalar integer functions: gcd, lcm, Fibonacci
//! numbers and factorials. They do not touch sequences.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Number theory (raw and checked variants).
pub mod number;
