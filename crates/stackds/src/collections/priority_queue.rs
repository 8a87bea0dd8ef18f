//! Bounded priority queue over a borrowed, fixed-size buffer.
//!
//! ## Purpose
//!
//! This module provides [`RingPriorityQueue`], a min-first priority queue that keeps
//! its elements sorted inside a caller-owned slice. It never allocates, never grows,
//! and cannot outlive the slice it borrows.
//!
//! ## Design notes
//!
//! * **Sorted ring**: Elements occupy a circular window of the buffer in ascending
//!   order, so the minimum is always at the front and dequeue is O(1).
//! * **Fast paths**: Inserting a new minimum or maximum extends the window at that
//!   end in O(1).
//! * **Minority-side shift**: Any other insert binary-searches its position and then
//!   moves only the shorter side of the window, so at most `len / 2` elements move.
//! * **Swap-based moves**: Elements are moved by swapping slots, so `T` needs no
//!   `Copy` or `Default` bound. Only operations returning owned values need `Clone`.
//! * **Always-checked capacity**: Inserting into a full queue returns
//!   [`StackError::CapacityExceeded`] in every build and leaves the queue untouched.
//!
//! ## Key concepts
//!
//! * **Logical slot**: Position `i` in the sorted window, `0 <= i < len`.
//! * **Physical slot**: Offset in the buffer, `(start + i) mod capacity`.
//! * **Stale slot**: A slot outside the window. Its value belongs to the caller's
//!   buffer and is overwritten on the next insert that reaches it.
//!
//! ## Invariants
//!
//! * Logical slots `0..len` are non-decreasing under the comparer.
//! * `len <= capacity`, where `capacity` is the buffer length.
//!
//! ## Non-goals
//!
//! * Growing the buffer. Callers needing more room bind a larger buffer.
//! * Removing anything other than the minimum.
//! * Stable ordering among equal elements.

// External dependencies
use core::fmt::{Debug, Formatter, Result as FmtResult};
use core::iter::FusedIterator;
use core::slice;
use log::debug;

// Internal dependencies
use crate::primitives::errors::StackError;
use crate::primitives::order::{Comparer, NaturalOrder};
use crate::primitives::ring::RingCursor;

// ============================================================================
// Queue
// ============================================================================

/// A min-first priority queue kept sorted inside a borrowed buffer.
///
/// ```rust
/// use stackds::prelude::*;
///
/// let mut storage = [0_i32; 8];
/// let mut queue = RingPriorityQueue::with_natural_order(&mut storage)?;
///
/// for value in [5, 1, 4, 2, 3] {
///     queue.insert(value)?;
/// }
///
/// assert_eq!(queue.try_dequeue(), Some(1));
/// assert_eq!(queue.peek(), Some(&2));
/// # Result::<(), StackError>::Ok(())
/// ```
pub struct RingPriorityQueue<'a, T, C = NaturalOrder> {
    buffer: &'a mut [T],
    comparer: C,
    cursor: RingCursor,
}

impl<'a, T: PartialOrd> RingPriorityQueue<'a, T, NaturalOrder> {
    /// Bind an empty queue to `buffer`, ordered by `T`'s own `PartialOrd`.
    #[inline]
    pub fn with_natural_order(buffer: &'a mut [T]) -> Result<Self, StackError> {
        Self::new(buffer, NaturalOrder)
    }
}

impl<'a, T, C: Comparer<T>> RingPriorityQueue<'a, T, C> {
    /// Bind an empty queue to `buffer`, ordered by `comparer`.
    ///
    /// The capacity is `buffer.len()`, which must be at least 1. Existing values in
    /// `buffer` are treated as free slots.
    pub fn new(buffer: &'a mut [T], comparer: C) -> Result<Self, StackError> {
        if buffer.is_empty() {
            debug!("RingPriorityQueue::new: zero-length buffer");
            return Err(StackError::EmptyBuffer);
        }

        let cursor = RingCursor::new(buffer.len());
        Ok(Self {
            buffer,
            comparer,
            cursor,
        })
    }

    /// Insert `elem`, keeping the queue sorted.
    ///
    /// Fails with [`StackError::CapacityExceeded`] when the queue is full; `elem` is
    /// dropped and the queue is unchanged.
    pub fn insert(&mut self, elem: T) -> Result<(), StackError> {
        if self.cursor.is_full() {
            debug!(
                "RingPriorityQueue::insert: rejected, capacity {} reached",
                self.cursor.capacity
            );
            return Err(StackError::CapacityExceeded {
                capacity: self.cursor.capacity,
            });
        }

        let len = self.cursor.len;

        // New minimum: extend the window backward.
        if len == 0 || self.comparer.le(&elem, self.slot(0)) {
            self.cursor.grow_front();
            let front = self.cursor.physical(0);
            self.buffer[front] = elem;
            return Ok(());
        }

        // New maximum: extend the window forward.
        if self.comparer.ge(&elem, self.slot(len - 1)) {
            let back = self.cursor.back();
            self.buffer[back] = elem;
            self.cursor.grow_back();
            return Ok(());
        }

        let idx = self.search(&elem);
        self.insert_at(idx, elem);
        Ok(())
    }

    /// Remove and return the minimum, or `None` if the queue is empty.
    pub fn try_dequeue(&mut self) -> Option<T>
    where
        T: Clone,
    {
        if self.cursor.is_empty() {
            return None;
        }

        let value = self.slot(0).clone();
        self.cursor.shrink_front();
        Some(value)
    }

    /// The current minimum.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.get(0)
    }

    /// The current maximum.
    #[inline]
    pub fn peek_back(&self) -> Option<&T> {
        self.cursor.len.checked_sub(1).map(|last| self.slot(last))
    }

    /// The element at logical position `i` (0 is the minimum).
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        if i < self.cursor.len {
            Some(self.slot(i))
        } else {
            None
        }
    }

    /// Forget every element. The buffer contents are left as they are.
    #[inline]
    pub fn clear(&mut self) {
        self.cursor.reset();
    }

    /// Remove elements in ascending order until the queue is empty.
    ///
    /// Elements not consumed before the iterator is dropped are discarded.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, 'a, T, C>
    where
        T: Clone,
    {
        Drain { queue: self }
    }

    /// The comparer the queue was built with.
    #[inline]
    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    // ------------------------------------------------------------------------
    // Internal helpers
    // ------------------------------------------------------------------------

    #[inline]
    fn slot(&self, i: usize) -> &T {
        &self.buffer[self.cursor.physical(i)]
    }

    // Swap logical slots `i` and `i + 1`.
    #[inline]
    fn swap_adjacent(&mut self, i: usize) {
        let a = self.cursor.physical(i);
        let b = self.cursor.physical(i + 1);
        self.buffer.swap(a, b);
    }

    // Binary search for the insertion point of an interior element.
    //
    // Callers have already ruled out `elem <= front` and `elem >= back`, so the
    // result lies in `1..len`. An exact match is returned as is.
    fn search(&self, elem: &T) -> usize {
        let mut lo = 0;
        let mut hi = self.cursor.len;

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match self.comparer.compare(elem, self.slot(mid)) {
                core::cmp::Ordering::Greater => lo = mid + 1,
                core::cmp::Ordering::Less => hi = mid,
                core::cmp::Ordering::Equal => return mid,
            }
        }

        lo
    }

    // Place `elem` at logical `idx`, moving whichever side of `idx` is shorter.
    fn insert_at(&mut self, idx: usize, elem: T) {
        let len = self.cursor.len;
        debug_assert!(idx > 0 && idx < len, "insert_at: index must be interior");

        if idx < len - idx {
            // Old slots 0..idx become 1..=idx after growing; walk `elem` from the
            // new front up to `idx`, pulling each of them down by one.
            self.cursor.grow_front();
            let front = self.cursor.physical(0);
            self.buffer[front] = elem;
            for i in 0..idx {
                self.swap_adjacent(i);
            }
        } else {
            // Walk `elem` from the new back slot down to `idx`, pushing old
            // slots idx..len up by one.
            let back = self.cursor.back();
            self.buffer[back] = elem;
            self.cursor.grow_back();
            for i in (idx..len).rev() {
                self.swap_adjacent(i);
            }
        }
    }
}

impl<'a, T, C> RingPriorityQueue<'a, T, C> {
    /// Number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.cursor.len
    }

    /// Number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cursor.capacity
    }

    /// Free slots left before inserts start failing.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.cursor.capacity - self.cursor.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cursor.is_full()
    }

    /// The sorted contents as two buffer slices; the second is non-empty only when
    /// the window wraps past the end of the buffer.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let RingCursor {
            start,
            len,
            capacity,
        } = self.cursor;

        if start + len <= capacity {
            (&self.buffer[start..start + len], &[])
        } else {
            (&self.buffer[start..], &self.buffer[..start + len - capacity])
        }
    }

    /// Iterate in ascending order without removing anything.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        let (head, tail) = self.as_slices();
        Iter {
            head: head.iter(),
            tail: tail.iter(),
        }
    }
}

impl<T: Debug, C> Debug for RingPriorityQueue<'_, T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'q, T, C> IntoIterator for &'q RingPriorityQueue<'_, T, C> {
    type Item = &'q T;
    type IntoIter = Iter<'q, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Iterators
// ============================================================================

/// Borrowing iterator over a queue in ascending order.
#[derive(Debug, Clone)]
pub struct Iter<'q, T> {
    head: slice::Iter<'q, T>,
    tail: slice::Iter<'q, T>,
}

impl<'q, T> Iterator for Iter<'q, T> {
    type Item = &'q T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.head.next().or_else(|| self.tail.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tail.next_back().or_else(|| self.head.next_back())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.head.len() + self.tail.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Dequeuing iterator returned by [`RingPriorityQueue::drain`].
pub struct Drain<'q, 'a, T, C> {
    queue: &'q mut RingPriorityQueue<'a, T, C>,
}

impl<T: Clone, C: Comparer<T>> Iterator for Drain<'_, '_, T, C> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.queue.try_dequeue()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.queue.len();
        (n, Some(n))
    }
}

impl<T: Clone, C: Comparer<T>> ExactSizeIterator for Drain<'_, '_, T, C> {}

impl<T: Clone, C: Comparer<T>> FusedIterator for Drain<'_, '_, T, C> {}

impl<T, C> Drop for Drain<'_, '_, T, C> {
    fn drop(&mut self) {
        self.queue.cursor.reset();
    }
}
