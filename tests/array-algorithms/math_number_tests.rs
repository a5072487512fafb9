#![cfg(feature = "dev")]
//! Tests for number-theory functions.
//!
//! ## Test Organization
//!
//! 1. **GCD / LCM** - Reference values, zero handling, Euclid recursion
//! 2. **Fibonacci** - Base cases, agreement with the recursive definition
//! 3. **Factorial** - Base cases, known values
//! 4. **Checked Variants** - Overflow and negative input reporting

use array_algorithms::internals::math::number::{
    checked_factorial, checked_fibonacci, checked_gcd, checked_lcm, factorial, fibonacci, gcd, lcm,
};
use array_algorithms::internals::primitives::errors::AlgoError;

// ============================================================================
// Helper Functions
// ============================================================================

/// Doubly recursive reference definition.
fn fib_recursive(n: u64) -> u64 {
    if n <= 1 {
        n
    } else {
        fib_recursive(n - 1) + fib_recursive(n - 2)
    }
}

// ============================================================================
// GCD / LCM Tests
// ============================================================================

/// Test reference values.
#[test]
fn test_gcd_lcm_reference() {
    assert_eq!(gcd(36, 60), 12);
    assert_eq!(lcm(36, 60), 180);
    assert_eq!(lcm(4, 6), 12);
}

/// Test zero arguments.
#[test]
fn test_gcd_lcm_zero() {
    assert_eq!(gcd(7, 0), 7);
    assert_eq!(gcd(0, 7), 7);
    assert_eq!(gcd(0, 0), 0);

    assert_eq!(lcm(7, 0), 0);
    assert_eq!(lcm(0, 7), 0);
}

/// Test the Euclid step identity gcd(a, b) == gcd(b, a % b).
#[test]
fn test_gcd_euclid_identity() {
    for a in 0u32..60 {
        for b in 1u32..60 {
            assert_eq!(gcd(a, b), gcd(b, a % b), "gcd({a}, {b})");
            assert_eq!(gcd(a, b), gcd(b, a), "gcd should be symmetric");
        }
    }
}

/// Test that gcd divides both arguments and lcm is a common multiple.
#[test]
fn test_gcd_lcm_divisibility() {
    for a in 1i64..40 {
        for b in 1i64..40 {
            let g = gcd(a, b);
            let l = lcm(a, b);
            assert_eq!(a % g, 0);
            assert_eq!(b % g, 0);
            assert_eq!(l % a, 0);
            assert_eq!(l % b, 0);
            assert_eq!(g * l, a * b);
        }
    }
}

/// Test that dividing first keeps lcm in range when the product would not be.
#[test]
fn test_lcm_divides_before_multiplying() {
    // 60_000 * 40_000 overflows i32, the lcm (120_000) does not
    assert_eq!(lcm(60_000i32, 40_000), 120_000);
}

// ============================================================================
// Fibonacci Tests
// ============================================================================

/// Test base cases and a reference value.
#[test]
fn test_fibonacci_reference() {
    assert_eq!(fibonacci(0), 0);
    assert_eq!(fibonacci(1), 1);
    assert_eq!(fibonacci(5), 5);
    assert_eq!(fibonacci(10), 55);
}

/// Test agreement with the doubly recursive definition.
#[test]
fn test_fibonacci_matches_recursive() {
    for n in 0u64..25 {
        assert_eq!(fibonacci(n), fib_recursive(n), "fib({n})");
    }
}

/// Test that negative input is returned unchanged.
#[test]
fn test_fibonacci_negative_passthrough() {
    assert_eq!(fibonacci(-3), -3);
}

/// Test the largest value that fits in u64.
#[test]
fn test_fibonacci_u64_limit() {
    assert_eq!(fibonacci(93u64), 12_200_160_415_121_876_738);
}

// ============================================================================
// Factorial Tests
// ============================================================================

/// Test base cases and reference values.
#[test]
fn test_factorial_reference() {
    assert_eq!(factorial(0), 1);
    assert_eq!(factorial(1), 1);
    assert_eq!(factorial(5), 120);
    assert_eq!(factorial(10), 3_628_800);
}

/// Test that negative input yields the empty product.
#[test]
fn test_factorial_negative_is_one() {
    assert_eq!(factorial(-4), 1);
}

/// Test the largest value that fits in u64.
#[test]
fn test_factorial_u64_limit() {
    assert_eq!(factorial(20u64), 2_432_902_008_176_640_000);
}

// ============================================================================
// Checked Variant Tests
// ============================================================================

/// Test that checked variants agree with raw ones in range.
#[test]
fn test_checked_agree_in_range() {
    assert_eq!(checked_gcd(36, 60), Ok(12));
    assert_eq!(checked_lcm(36, 60), Ok(180));
    assert_eq!(checked_lcm(0, 60), Ok(0));
    assert_eq!(checked_fibonacci(5), Ok(5));
    assert_eq!(checked_fibonacci(1), Ok(1));
    assert_eq!(checked_factorial(0), Ok(1));
    assert_eq!(checked_factorial(5), Ok(120));
}

/// Test overflow detection.
#[test]
fn test_checked_overflow() {
    assert_eq!(checked_factorial(21u64), Err(AlgoError::Overflow("factorial")));
    assert_eq!(checked_factorial(13i32), Err(AlgoError::Overflow("factorial")));
    assert_eq!(checked_factorial(12i32), Ok(479_001_600));

    assert_eq!(checked_fibonacci(94u64), Err(AlgoError::Overflow("fibonacci")));
    assert_eq!(checked_fibonacci(93u64), Ok(12_200_160_415_121_876_738));

    assert_eq!(
        checked_lcm(i32::MAX, i32::MAX - 1),
        Err(AlgoError::Overflow("lcm"))
    );
}

/// Test negative input rejection.
#[test]
fn test_checked_negative() {
    assert_eq!(checked_gcd(-4, 6), Err(AlgoError::NegativeInput("gcd")));
    assert_eq!(checked_lcm(4, -6), Err(AlgoError::NegativeInput("lcm")));
    assert_eq!(checked_fibonacci(-1), Err(AlgoError::NegativeInput("fibonacci")));
    assert_eq!(checked_factorial(-1), Err(AlgoError::NegativeInput("factorial")));
}

/// Test unsigned types.
#[test]
fn test_unsigned_types() {
    assert_eq!(gcd(48u8, 18u8), 6);
    assert_eq!(checked_lcm(16u8, 20u8), Ok(80));
    assert_eq!(checked_lcm(16u8, 17u8), Err(AlgoError::Overflow("lcm")));
}
