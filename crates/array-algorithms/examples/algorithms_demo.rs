//! Sequence Algorithms Demo
//!
//! This example walks through every algorithm in the crate:
//! - Binary and linear search
//! - The five sorts on the same input
//! - GCD, LCM, Fibonacci and factorial
//! - Array aggregates
//! - The fluent API with validation
//!
//! Set `RUST_LOG=debug` to see the engine's tracing events.

use array_algorithms::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AlgoError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "=".repeat(60));
    println!("Sequence Algorithms - Demo");
    println!("{}", "=".repeat(60));
    println!();

    example_1_search();
    example_2_sorting();
    example_3_number_theory();
    example_4_aggregates();
    example_5_fluent_api()?;

    Ok(())
}

fn join(seq: &[i32]) -> String {
    seq.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Example 1: Searching
fn example_1_search() {
    println!("Example 1: Searching");
    println!("{}", "-".repeat(60));

    let arr: Vec<i32> = (1..=10).collect();

    let target = 5;
    let index = to_signed_index(binary_search(&arr, &target));
    println!("Binary Search - Target {target} is at index: {index}");

    let target = 7;
    let index = to_signed_index(linear_search(&arr, &target));
    println!("Linear Search - Target {target} is at index: {index}");

    // Expected output:
    // Binary Search - Target 5 is at index: 4
    // Linear Search - Target 7 is at index: 6
    println!();
}

/// Example 2: Sorting the same input with every method
fn example_2_sorting() {
    println!("Example 2: Sorting");
    println!("{}", "-".repeat(60));

    let original = [64, 34, 25, 12, 22, 11, 90];
    println!("Original Array: {}", join(&original));

    for method in SortMethod::ALL {
        let mut arr = original;
        method.apply(&mut arr);
        println!("{} Sort: {}", method.name(), join(&arr));
    }

    // Expected output:
    // Original Array: 64 34 25 12 22 11 90
    // Bubble Sort: 11 12 22 25 34 64 90
    // ... (identical for every method)
    println!();
}

/// Example 3: Number theory
fn example_3_number_theory() {
    println!("Example 3: Number Theory");
    println!("{}", "-".repeat(60));

    let (a, b) = (36, 60);
    println!("GCD of {a} and {b} is: {}", gcd(a, b));
    println!("LCM of {a} and {b} is: {}", lcm(a, b));

    let n = 5;
    println!("Fibonacci of {n} is: {}", fibonacci(n));
    println!("Factorial of {n} is: {}", factorial(n));

    match checked_factorial(25i64) {
        Ok(v) => println!("Factorial of 25 is: {v}"),
        Err(e) => println!("Factorial of 25 failed: {e}"),
    }

    // Expected output:
    // GCD of 36 and 60 is: 12
    // LCM of 36 and 60 is: 180
    // Fibonacci of 5 is: 5
    // Factorial of 5 is: 120
    // Factorial of 25 failed: Integer overflow in factorial
    println!();
}

/// Example 4: Aggregates
fn example_4_aggregates() {
    println!("Example 4: Aggregates");
    println!("{}", "-".repeat(60));

    let mut arr = [10, 20, 30, 40, 50];
    println!("Array: {}", join(&arr));
    println!("Sum: {:?}", sum(&arr));
    println!("Average: {:?}", average(&arr));
    println!("Max: {:?}, Min: {:?}", max(&arr), min(&arr));
    println!("Contains 30: {}", contains(&arr, &30));

    reverse(&mut arr);
    println!("Reversed: {}", join(&arr));
    println!();
}

/// Example 5: Fluent API with validation
fn example_5_fluent_api() -> Result<(), AlgoError> {
    println!("Example 5: Fluent API");
    println!("{}", "-".repeat(60));

    let sorter = Sorter::new().method(Quick).skip_if_sorted().build()?;
    let mut data = vec![64, 34, 25, 12, 22, 11, 90];
    let outcome = sorter.sort(&mut data);
    println!("{outcome}");
    println!("Sorted: {}", join(&data));
    println!();

    let searcher = Searcher::new().method(Binary).require_sorted().build()?;
    println!("{}", searcher.find(&data, &22)?);
    println!("{}", searcher.find(&data, &23)?);

    match searcher.find(&[3, 1, 2], &1) {
        Ok(outcome) => println!("{outcome}"),
        Err(e) => println!("Rejected: {e}"),
    }
    println!();

    Ok(())
}
