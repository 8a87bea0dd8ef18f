//! Ring addressing primitives.
//!
//! This module maps logical positions in a window onto physical slots of a
//! fixed-length buffer, growing and shrinking the window at either end with
//! wraparound. It never touches the buffer itself.

// Cursor over a circular window `[start, start + len)` of a buffer with `capacity` slots.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RingCursor {
    // Physical index of logical slot 0.
    pub start: usize,

    // Number of occupied slots.
    pub len: usize,

    // Number of physical slots.
    pub capacity: usize,
}

impl RingCursor {
    // Create an empty cursor over `capacity` slots.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 1, "RingCursor::new: capacity must be at least 1");
        Self {
            start: 0,
            len: 0,
            capacity,
        }
    }

    // `(index + addend) mod capacity`, for `index < capacity` and `addend <= capacity`.
    #[inline]
    pub fn wrap_add(&self, index: usize, addend: usize) -> usize {
        let sum = index + addend;
        if sum >= self.capacity {
            sum - self.capacity
        } else {
            sum
        }
    }

    // `(index - subtrahend) mod capacity`, for `index < capacity` and `subtrahend <= capacity`.
    #[inline]
    pub fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize {
        if index >= subtrahend {
            index - subtrahend
        } else {
            index + self.capacity - subtrahend
        }
    }

    // Physical slot of logical position `i`. Valid for `i <= capacity`.
    #[inline]
    pub fn physical(&self, i: usize) -> usize {
        debug_assert!(i <= self.capacity, "physical: logical index out of range");
        self.wrap_add(self.start, i)
    }

    // Physical slot one past the last occupied one.
    #[inline]
    pub fn back(&self) -> usize {
        self.physical(self.len)
    }

    // Extend the window by one slot before logical 0. The new slot becomes logical 0.
    #[inline]
    pub fn grow_front(&mut self) {
        debug_assert!(!self.is_full(), "grow_front: cursor is full");
        self.start = self.wrap_sub(self.start, 1);
        self.len += 1;
    }

    // Extend the window by one slot after the last occupied one.
    #[inline]
    pub fn grow_back(&mut self) {
        debug_assert!(!self.is_full(), "grow_back: cursor is full");
        self.len += 1;
    }

    // Drop logical 0 from the window.
    #[inline]
    pub fn shrink_front(&mut self) {
        debug_assert!(!self.is_empty(), "shrink_front: cursor is empty");
        self.start = self.wrap_add(self.start, 1);
        self.len -= 1;
    }

    #[inline]
    pub fn reset(&mut self) {
        self.start = 0;
        self.len = 0;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }
}
