//! Scalar number theory: gcd, lcm, fibonacci and factorial.
//!
//! ## Purpose
//!
//! This module provides the integer functions that accompany the sequence
//! algorithms. Each function comes in two flavors:
//!
//! * **Raw** (`gcd`, `lcm`, `fibonacci`, `factorial`): no validation, overflow
//!   follows the host integer semantics (panic in debug, wrap in release).
//! * **Checked** (`checked_*`): reject negative arguments and report overflow
//!   through [`AlgoError`].
//!
//! ## Design notes
//!
//! * **Generics**: All functions are generic over [`PrimInt`], so they work for
//!   every signed and unsigned primitive integer.
//! * **Iteration**: Fibonacci and factorial are computed iteratively. The
//!   outputs match the recursive definitions exactly, in linear time and
//!   constant stack.
//! * **Divide first**: `lcm` divides by the gcd before multiplying, so it only
//!   overflows when the true result does not fit.
//!
//! ## Invariants
//!
//! * `gcd(a, 0) == a` and `gcd(0, b) == b`.
//! * `lcm(a, 0) == lcm(0, b) == 0`.
//! * `fibonacci(0) == 0`, `fibonacci(1) == 1`, `factorial(0) == 1`.
//!
//! ## Non-goals
//!
//! * Arbitrary precision arithmetic.
//! * Normalizing the sign of results for negative inputs to the raw functions.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::errors::AlgoError;

// ============================================================================
// Raw Functions
// ============================================================================

/// Greatest common divisor by Euclid's repeated remainder.
///
/// For negative inputs the sign of the result follows the remainder
/// semantics of `%` and is not normalized.
#[inline]
pub fn gcd<T: PrimInt>(mut a: T, mut b: T) -> T {
    while b != T::zero() {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Least common multiple, `a / gcd(a, b) * b`.
///
/// Returns zero when either argument is zero.
#[inline]
pub fn lcm<T: PrimInt>(a: T, b: T) -> T {
    if a == T::zero() || b == T::zero() {
        return T::zero();
    }
    a / gcd(a, b) * b
}

/// The `n`-th Fibonacci number with `fib(0) = 0` and `fib(1) = 1`.
///
/// Any `n <= 1` (including negative `n`) is returned unchanged.
pub fn fibonacci<T: PrimInt>(n: T) -> T {
    if n <= T::one() {
        return n;
    }

    let (mut prev, mut curr) = (T::zero(), T::one());
    let mut i = T::one();
    while i < n {
        let next = prev + curr;
        prev = curr;
        curr = next;
        i = i + T::one();
    }
    curr
}

/// Factorial `n! = 1 * 2 * ... * n` with `0! = 1`.
///
/// Negative `n` yields the empty product, `1`.
pub fn factorial<T: PrimInt>(n: T) -> T {
    let mut acc = T::one();
    let mut k = n;
    while k > T::one() {
        acc = acc * k;
        k = k - T::one();
    }
    acc
}

// ============================================================================
// Checked Functions
// ============================================================================

/// Fail with `NegativeInput` when any argument is below zero.
#[inline]
fn ensure_non_negative<T: PrimInt>(values: &[T], op: &'static str) -> Result<(), AlgoError> {
    if values.iter().any(|&v| v < T::zero()) {
        return Err(AlgoError::NegativeInput(op));
    }
    Ok(())
}

/// Greatest common divisor of two non-negative integers.
pub fn checked_gcd<T: PrimInt>(a: T, b: T) -> Result<T, AlgoError> {
    ensure_non_negative(&[a, b], "gcd")?;
    Ok(gcd(a, b))
}

/// Least common multiple of two non-negative integers, detecting overflow.
pub fn checked_lcm<T: PrimInt>(a: T, b: T) -> Result<T, AlgoError> {
    ensure_non_negative(&[a, b], "lcm")?;
    if a == T::zero() || b == T::zero() {
        return Ok(T::zero());
    }
    (a / gcd(a, b))
        .checked_mul(&b)
        .ok_or(AlgoError::Overflow("lcm"))
}

/// The `n`-th Fibonacci number, detecting overflow.
pub fn checked_fibonacci<T: PrimInt>(n: T) -> Result<T, AlgoError> {
    ensure_non_negative(&[n], "fibonacci")?;
    if n <= T::one() {
        return Ok(n);
    }

    let (mut prev, mut curr) = (T::zero(), T::one());
    let mut i = T::one();
    while i < n {
        let next = prev
            .checked_add(&curr)
            .ok_or(AlgoError::Overflow("fibonacci"))?;
        prev = curr;
        curr = next;
        i = i + T::one();
    }
    Ok(curr)
}

/// Factorial of a non-negative integer, detecting overflow.
pub fn checked_factorial<T: PrimInt>(n: T) -> Result<T, AlgoError> {
    ensure_non_negative(&[n], "factorial")?;

    let mut acc = T::one();
    let mut k = n;
    while k > T::one() {
        acc = acc
            .checked_mul(&k)
            .ok_or(AlgoError::Overflow("factorial"))?;
        k = k - T::one();
    }
    Ok(acc)
}
