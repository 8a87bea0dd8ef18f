//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides in-place selection and summary statistics over
//! caller-owned slices. It depends only on the Primitives layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Collections
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Quickselect.
pub mod selection;

/// Median, mean, variance.
pub mod statistics;
