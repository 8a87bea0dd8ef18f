//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the ordering contract, ring addressing, and error
//! types used throughout the crate. It has zero internal dependencies within
//! the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Collections
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Comparator contract.
pub mod order;

/// Ring addressing.
pub mod ring;

/// Shared error types.
pub mod errors;
