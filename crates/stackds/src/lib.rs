//! # stackds: allocation-free ordered data structures for Rust
//!
//! Two utilities for hot paths that must not touch the heap:
//!
//! * [`RingPriorityQueue`](prelude::RingPriorityQueue): a bounded, min-first priority
//!   queue that keeps its elements sorted inside a buffer you own (a stack array,
//!   a slice of a larger arena, ...).
//! * [`find_median_destructive`](prelude::find_median_destructive): an in-place
//!   Quickselect median that reorders the slice it is given.
//!
//! Both are generic over the element type and take a caller-supplied ordering
//! ([`Comparer`](prelude::Comparer)). Closures work directly; [`NaturalOrder`](prelude::NaturalOrder)
//! covers anything `PartialOrd`, floats included.
//!
//! ## Quick Start
//!
//! ### Priority queue
//!
//! ```rust
//! use stackds::prelude::*;
//!
//! // The queue borrows this array; it never allocates and cannot outlive it.
//! let mut storage = [0_u32; 16];
//! let mut queue = RingPriorityQueue::with_natural_order(&mut storage)?;
//!
//! for cost in [40, 10, 30, 20] {
//!     queue.insert(cost)?;
//! }
//!
//! let drained: Vec<u32> = queue.drain().collect();
//! assert_eq!(drained, [10, 20, 30, 40]);
//! # Result::<(), StackError>::Ok(())
//! ```
//!
//! ### Custom ordering
//!
//! ```rust
//! use stackds::prelude::*;
//!
//! #[derive(Clone, Default)]
//! struct Job {
//!     priority: u8,
//!     id: u32,
//! }
//!
//! let mut storage: [Job; 4] = Default::default();
//! let mut queue = RingPriorityQueue::new(&mut storage, Reverse(ByKey(|j: &Job| j.priority)))?;
//!
//! queue.insert(Job { priority: 1, id: 7 })?;
//! queue.insert(Job { priority: 9, id: 3 })?;
//!
//! // Highest priority first.
//! assert_eq!(queue.try_dequeue().map(|j| j.id), Some(3));
//! # Result::<(), StackError>::Ok(())
//! ```
//!
//! ### Median
//!
//! ```rust
//! use stackds::prelude::*;
//!
//! let mut samples = [1, 1, -3, 20, 4, 5, 8];
//! assert_eq!(find_median_destructive(&mut samples)?, 4);
//!
//! // Even length: the upper middle element, no averaging.
//! let mut even = [4.0, 1.0, 3.0, 2.0];
//! assert_eq!(find_median_destructive(&mut even)?, 3.0);
//! # Result::<(), StackError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every precondition failure is a [`StackError`](prelude::StackError), checked in
//! release builds too:
//!
//! - **`EmptyBuffer`**: a queue was bound to a zero-length buffer.
//! - **`CapacityExceeded`**: `insert` on a full queue. The queue is left unchanged.
//! - **`EmptyInput`**: median, selection, mean or variance over an empty slice.
//! - **`IndexOutOfBounds`**: selection of a rank past the end of the slice.
//!
//! Dequeuing from an empty queue is not an error; it returns `None`.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to drop the standard library. The crate needs
//! neither `std` nor `alloc`:
//!
//! ```toml
//! [dependencies]
//! stackds = { version = "0.1", default-features = false }
//! ```
//!
//! ## Logging
//!
//! Rejected operations are reported through the [`log`](https://docs.rs/log) facade at
//! `debug` level. No logger is installed by this crate.

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - ordering contract, ring addressing, errors.
mod primitives;

// Layer 2: Math - selection and statistics.
mod math;

// Layer 3: Collections - buffer-borrowing views.
mod collections;

// Standard prelude.
pub mod prelude {
    pub use crate::collections::priority_queue::{Drain, Iter, RingPriorityQueue};
    pub use crate::math::selection::{select_nth_destructive, select_nth_destructive_by};
    pub use crate::math::statistics::{
        find_median_destructive, find_median_destructive_by, mean, variance,
    };
    pub use crate::primitives::errors::StackError;
    pub use crate::primitives::order::{ByKey, Comparer, NaturalOrder, Reverse};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod collections {
        pub use crate::collections::*;
    }
}
