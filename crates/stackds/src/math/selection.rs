//! In-place rank selection (Quickselect).
//!
//! ## Purpose
//!
//! This module finds the element of a given rank in a mutable slice without
//! sorting it fully and without allocating.
//!
//! ## Design notes
//!
//! * **Pivot**: The first element of the current range is the pivot; there is no
//!   randomization or median-of-medians fallback.
//! * **Partition**: A two-ended scan keeps `<= pivot` on the left and `>= pivot` on the
//!   right, then swaps the pivot into its final index.
//! * **Destructive**: The slice is left reordered. It is a permutation of the input.
//!
//! ## Invariants
//!
//! * The target rank always lies inside the current `[left, right]` range.
//! * After selection, every element left of rank `k` is `<=` it and every element
//!   right of it is `>=` it.
//!
//! ## Non-goals
//!
//! * Guaranteed linear time. Already-ordered input hits the O(n^2) worst case.

// External dependencies
use log::debug;

// Internal dependencies
use crate::primitives::errors::StackError;
use crate::primitives::order::Comparer;

// ============================================================================
// Partition
// ============================================================================

/// Partition `buf[left..=right]` around `buf[left]` and return the pivot's final index.
///
/// On return, `buf[left..p]` are `<=` the pivot and `buf[p + 1..=right]` are `>=` it.
#[inline]
pub fn partition<T, C>(buf: &mut [T], left: usize, right: usize, comparer: &C) -> usize
where
    C: Comparer<T> + ?Sized,
{
    debug_assert!(left <= right && right < buf.len(), "partition: invalid range");

    let mut i = left + 1;
    let mut j = right;

    // `i` never passes `j + 1` and `j` never drops below `left`.
    while i <= j {
        if comparer.le(&buf[i], &buf[left]) {
            i += 1;
            continue;
        }
        if comparer.ge(&buf[j], &buf[left]) {
            j -= 1;
            continue;
        }
        buf.swap(i, j);
    }

    buf.swap(left, j);
    j
}

// ============================================================================
// Selection
// ============================================================================

/// Reorder `buf` so that rank `k` (0-indexed) is in its sorted position and return it.
pub fn select_nth_destructive_by<T, C>(
    buf: &mut [T],
    k: usize,
    comparer: C,
) -> Result<&T, StackError>
where
    C: Comparer<T>,
{
    let len = buf.len();
    if len == 0 {
        debug!("select_nth_destructive: empty input");
        return Err(StackError::EmptyInput);
    }
    if k >= len {
        debug!("select_nth_destructive: rank {k} out of bounds for length {len}");
        return Err(StackError::IndexOutOfBounds { index: k, len });
    }

    let mut left = 0;
    let mut right = len - 1;

    loop {
        let pivot = partition(buf, left, right, &comparer);
        if pivot == k {
            return Ok(&buf[k]);
        }
        if pivot < k {
            left = pivot + 1;
        } else {
            // `pivot > k >= left`, so this cannot underflow.
            right = pivot - 1;
        }
    }
}

/// [`select_nth_destructive_by`] with [`NaturalOrder`](crate::primitives::order::NaturalOrder).
#[inline]
pub fn select_nth_destructive<T: PartialOrd>(buf: &mut [T], k: usize) -> Result<&T, StackError> {
    select_nth_destructive_by(buf, k, crate::primitives::order::NaturalOrder)
}
