//! Allocation-free summary statistics over caller-owned slices.
//!
//! The median is found in place with Quickselect and rearranges its input; the
//! mean and variance only read theirs.

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::math::selection::select_nth_destructive_by;
use crate::primitives::errors::StackError;
use crate::primitives::order::{Comparer, NaturalOrder};

/// Find the median of `buf` under the type's natural order, reordering `buf`.
///
/// Returns the element of rank `n / 2`. For even `n` this is the upper of the two
/// middle elements; no averaging is done. An empty slice is an error.
#[inline]
pub fn find_median_destructive<T>(buf: &mut [T]) -> Result<T, StackError>
where
    T: PartialOrd + Clone,
{
    find_median_destructive_by(buf, NaturalOrder)
}

/// Find the median of `buf` under `comparer`, reordering `buf`.
pub fn find_median_destructive_by<T, C>(buf: &mut [T], comparer: C) -> Result<T, StackError>
where
    T: Clone,
    C: Comparer<T>,
{
    let target = buf.len() / 2;
    select_nth_destructive_by(buf, target, comparer).cloned()
}

/// Arithmetic mean of `values`.
pub fn mean<T: Float>(values: &[T]) -> Result<T, StackError> {
    if values.is_empty() {
        debug!("mean: empty input");
        return Err(StackError::EmptyInput);
    }

    let mut sum = T::zero();
    let mut count = T::zero();
    for &val in values {
        sum = sum + val;
        count = count + T::one();
    }
    Ok(sum / count)
}

/// Population variance of `values`, using Welford's single-pass update.
pub fn variance<T: Float>(values: &[T]) -> Result<T, StackError> {
    if values.is_empty() {
        debug!("variance: empty input");
        return Err(StackError::EmptyInput);
    }

    let mut mean = T::zero();
    let mut m2 = T::zero();
    let mut count = T::zero();
    for &val in values {
        count = count + T::one();
        let delta = val - mean;
        mean = mean + delta / count;
        m2 = m2 + delta * (val - mean);
    }
    Ok(m2 / count)
}
