#![cfg(feature = "dev")]
//! Tests for median, mean and variance.
//!
//! These tests verify the summary statistics computed over caller-owned slices:
//! - Quickselect median with the `n / 2` index convention
//! - Permutation (not mutation) of the input
//! - Mean and population variance
//!
//! ## Test Organization
//!
//! 1. **Median Computation** - Known values, odd and even lengths
//! 2. **Median Side Effects** - Permutation property
//! 3. **Edge Cases** - Empty and single inputs
//! 4. **Mean and Variance** - Known values
//! 5. **Randomized Cross-Checks** - Reference sort

use approx::assert_relative_eq;
use rand::prelude::*;

use stackds::internals::math::statistics::{
    find_median_destructive, find_median_destructive_by, mean, variance,
};
use stackds::internals::primitives::errors::StackError;
use stackds::internals::primitives::order::{ByKey, Reverse};

// ============================================================================
// Median Computation Tests
// ============================================================================

/// Test the median of an odd-length integer buffer.
///
/// Sorted: [-3, 1, 1, 4, 5, 8, 20], index 3 is 4.
#[test]
fn test_median_odd_integers() {
    let mut buf = [1, 1, -3, 20, 4, 5, 8];
    assert_eq!(find_median_destructive(&mut buf), Ok(4));
}

/// Test the median of an odd-length float buffer.
///
/// Sorted: [-32, -10, 0, 11, 32], index 2 is 0.
#[test]
fn test_median_odd_floats() {
    let mut buf = [0.0f32, -32.0, 32.0, 11.0, -10.0];
    let median = find_median_destructive(&mut buf).unwrap();

    assert_relative_eq!(median, 0.0, epsilon = 1e-12);
}

/// Test that even lengths return the upper middle element, not an average.
///
/// Sorted: [1, 2, 3, 4], index 2 is 3 (the average would be 2.5).
#[test]
fn test_median_even_returns_upper_middle() {
    let mut buf = [1.0f64, 2.0, 3.0, 4.0];
    let median = find_median_destructive(&mut buf).unwrap();

    assert_relative_eq!(median, 3.0, epsilon = 1e-12);
}

/// Test the median of already-sorted and reverse-sorted input.
///
/// These hit the quadratic pivot path but must still be correct.
#[test]
fn test_median_ordered_inputs() {
    let mut ascending: Vec<i32> = (0..101).collect();
    let mut descending: Vec<i32> = (0..101).rev().collect();

    assert_eq!(find_median_destructive(&mut ascending), Ok(50));
    assert_eq!(find_median_destructive(&mut descending), Ok(50));
}

/// Test the median when most values are equal.
#[test]
fn test_median_many_duplicates() {
    let mut buf = [7, 7, 7, 1, 7, 9, 7, 7];
    assert_eq!(find_median_destructive(&mut buf), Ok(7));
}

/// Test the median under a caller-supplied comparer.
///
/// Under the reversed order, rank 2 of [5, 4, 3, 2, 1] is 3; rank 3 of 6 elements
/// [6, 5, 4, 3, 2, 1] is 3.
#[test]
fn test_median_with_comparer() {
    let mut odd = [1, 2, 3, 4, 5];
    let mut even = [1, 2, 3, 4, 5, 6];

    let descending = Reverse(|a: &i32, b: &i32| a.cmp(b));

    assert_eq!(find_median_destructive_by(&mut odd, descending), Ok(3));
    assert_eq!(find_median_destructive_by(&mut even, descending), Ok(3));
}

/// Test the median of records ordered by a field.
#[test]
fn test_median_by_field() {
    let mut buf = [(30, 'c'), (10, 'a'), (50, 'e'), (20, 'b'), (40, 'd')];
    let median = find_median_destructive_by(&mut buf, ByKey(|p: &(i32, char)| p.0));

    assert_eq!(median, Ok((30, 'c')));
}

// ============================================================================
// Median Side Effect Tests
// ============================================================================

/// Test that the buffer afterwards is a permutation of the input.
#[test]
fn test_median_permutes_input() {
    let original = [9, -4, 17, 0, 3, 3, -12, 8, 21, 5, 3];
    let mut buf = original;
    find_median_destructive(&mut buf).unwrap();

    let mut before = original.to_vec();
    let mut after = buf.to_vec();
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

/// Test that the median ends up in the middle slot with the halves split around it.
#[test]
fn test_median_partitions_buffer() {
    let mut buf = [9, -4, 17, 0, 3, 6, -12, 8, 21, 5, 2];
    let median = find_median_destructive(&mut buf).unwrap();
    let mid = buf.len() / 2;

    assert_eq!(buf[mid], median);
    assert!(buf[..mid].iter().all(|&v| v <= median));
    assert!(buf[mid + 1..].iter().all(|&v| v >= median));
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test that an empty buffer is an error rather than a placeholder value.
#[test]
fn test_median_empty_input() {
    let mut buf: [f64; 0] = [];
    assert_eq!(find_median_destructive(&mut buf), Err(StackError::EmptyInput));
}

/// Test single and two-element buffers.
#[test]
fn test_median_tiny_inputs() {
    let mut one = [42];
    let mut two = [8, 3];

    assert_eq!(find_median_destructive(&mut one), Ok(42));
    assert_eq!(find_median_destructive(&mut two), Ok(8));
}

// ============================================================================
// Mean and Variance Tests
// ============================================================================

/// Test the mean of a small sample.
#[test]
fn test_mean_basic() {
    let values = [2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_relative_eq!(mean(&values).unwrap(), 5.0, epsilon = 1e-12);
}

/// Test the population variance of a small sample.
///
/// Deviations from 5: [-3, -1, -1, -1, 0, 0, 2, 4], squared sum 32, / 8 = 4.
#[test]
fn test_variance_basic() {
    let values = [2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_relative_eq!(variance(&values).unwrap(), 4.0, epsilon = 1e-12);
}

/// Test that variance is zero for constant input and for a single value.
#[test]
fn test_variance_constant() {
    assert_relative_eq!(variance(&[3.5f64; 10]).unwrap(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(variance(&[-1.0f32]).unwrap(), 0.0, epsilon = 1e-6);
}

/// Test that variance is stable with a large common offset.
#[test]
fn test_variance_large_offset() {
    let values = [1e9 + 4.0, 1e9 + 7.0, 1e9 + 13.0, 1e9 + 16.0];
    assert_relative_eq!(variance(&values).unwrap(), 22.5, epsilon = 1e-6);
}

/// Test that mean and variance reject empty input.
#[test]
fn test_mean_variance_empty() {
    let empty: [f64; 0] = [];
    assert_eq!(mean(&empty), Err(StackError::EmptyInput));
    assert_eq!(variance(&empty), Err(StackError::EmptyInput));
}

// ============================================================================
// Randomized Cross-Check Tests
// ============================================================================

/// Test the median against the `n / 2` element of a reference sort.
#[test]
fn test_random_median_matches_sort() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..300 {
        let n = rng.random_range(1..=500);
        let input: Vec<i64> = (0..n).map(|_| rng.random_range(-50..50)).collect();

        let mut expected = input.clone();
        expected.sort();

        let mut buf = input.clone();
        let median = find_median_destructive(&mut buf).unwrap();
        assert_eq!(median, expected[n / 2], "mismatch for n = {n}");

        buf.sort();
        assert_eq!(buf, expected, "not a permutation for n = {n}");
    }
}
