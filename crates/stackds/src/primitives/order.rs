//! Ordering contract shared by the queue and the selection routines.
//!
//! ## Purpose
//!
//! This module defines the comparator abstraction every component takes at its
//! boundary, plus the handful of ready-made comparers callers reach for most.
//!
//! ## Design notes
//!
//! * **Closures are comparers**: any `Fn(&T, &T) -> Ordering` implements [`Comparer`].
//! * **Floats are first-class**: [`NaturalOrder`] needs only `PartialOrd`; incomparable
//!   pairs (NaN) compare as `Equal`.
//! * **Zero-sized**: the provided comparers carry no state beyond an optional key closure.
//!
//! ## Invariants
//!
//! * A comparer is expected to be a total order over the values it is given. The
//!   components stay memory-safe under an inconsistent comparer, but their output order
//!   is then unspecified.
//!
//! ## Non-goals
//!
//! * This module does not provide stable (insertion-order) tie-breaking.

// External dependencies
use core::cmp::Ordering;

// ============================================================================
// Comparer Trait
// ============================================================================

/// A total order over `T`, supplied by the caller.
pub trait Comparer<T: ?Sized> {
    /// Compare `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// `a <= b` under this order.
    #[inline]
    fn le(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Greater
    }

    /// `a >= b` under this order.
    #[inline]
    fn ge(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Less
    }
}

impl<T: ?Sized, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

// ============================================================================
// Provided Comparers
// ============================================================================

/// Ascending order from the type's own `PartialOrd`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: PartialOrd + ?Sized> Comparer<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    }
}

/// Flips the wrapped comparer, turning a min-first queue into a max-first one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Comparer<T>> Comparer<T> for Reverse<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Orders values by a projected key.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Comparer<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        NaturalOrder.compare(&(self.0)(a), &(self.0)(b))
    }
}
