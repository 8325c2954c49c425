// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{grow::grown_capacity, GrowVec};

impl<T: Default> GrowVec<T> {
    /// Appends `value` at the end. Amortized O(1).
    ///
    /// When the vector is full, the capacity first grows by the doubling
    /// policy (to 1 from 0), moving the existing elements into the new
    /// buffer; otherwise the value lands in an existing spare slot.
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.len == self.buf.len() {
            self.reserve(grown_capacity(self.buf.len(), self.len + 1));
        }
        self.buf[self.len] = value;
        self.len += 1;
    }
}
