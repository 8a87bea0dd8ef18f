//! Error types for queue and selection operations.
//!
//! ## Purpose
//!
//! This module defines the precondition failures that can occur when binding a
//! queue to a buffer, inserting into a full queue, or selecting from an empty
//! slice.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the capacity that was hit).
//! * **Allocation-free**: No variant carries a heap-allocated message, so the type
//!   is usable with neither `std` nor `alloc`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Construction**: A queue cannot be bound to a zero-length buffer.
//! 2. **Capacity**: Inserting past the buffer length is rejected in every build.
//! 3. **Selection**: Median and rank queries need a non-empty input and an in-range rank.
//!
//! ## Non-goals
//!
//! * An empty queue on dequeue is a normal negative result (`None`), not an error.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for queue and selection operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// The backing buffer has no slots; a queue needs capacity of at least 1.
    EmptyBuffer,

    /// The queue already holds as many elements as its buffer has slots.
    CapacityExceeded {
        /// Number of slots in the backing buffer.
        capacity: usize,
    },

    /// Input slice is empty; there is no element to select.
    EmptyInput,

    /// Requested rank does not exist in the input slice.
    IndexOutOfBounds {
        /// The rank that was requested.
        index: usize,
        /// Length of the input slice.
        len: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for StackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyBuffer => write!(f, "Backing buffer is empty (capacity must be at least 1)"),
            Self::CapacityExceeded { capacity } => {
                write!(f, "Capacity exceeded: queue already holds {capacity} elements")
            }
            Self::EmptyInput => write!(f, "Input slice is empty"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Rank {index} is out of bounds for input of length {len}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for StackError {}
