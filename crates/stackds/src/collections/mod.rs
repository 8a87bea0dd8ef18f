//! Layer 3: Collections
//!
//! # Purpose
//!
//! This layer provides the stateful views that borrow a caller's buffer. It
//! depends on the Primitives layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Collections ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sorted ring priority queue.
pub mod priority_queue;
