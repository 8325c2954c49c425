// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buf::OwnedBuf, vec::GrowVec};

// Core imports
use core::mem;

/// Returns the capacity the doubling policy yields for `required` slots.
///
/// Doubles from `current` (starting at 1 when `current == 0`) until the
/// result is at least `required`. Never shrinks.
pub(crate) fn grown_capacity(current: usize, required: usize) -> usize {
    let mut capacity = if current == 0 { 1 } else { current };
    while capacity < required {
        capacity *= 2;
    }
    capacity
}

impl<T: Default> GrowVec<T> {
    /// Ensures `capacity >= new_capacity`; a no-op when it already is.
    ///
    /// On growth a buffer of exactly `new_capacity` slots is allocated, the
    /// `len` elements are moved across in order, and the remaining slots are
    /// default-initialized. The length is unchanged. Note that `reserve`
    /// allocates the requested capacity as-is; only `push`/`insert`/`resize`
    /// apply the doubling policy.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.buf.len() {
            return;
        }
        let mut next = OwnedBuf::with_capacity(new_capacity);
        for i in 0..self.len {
            next[i] = mem::take(&mut self.buf[i]);
        }
        self.buf = next;
    }

    /// Resizes to `new_len`, default-initializing any newly exposed slots.
    ///
    /// - `new_len <= len`: truncates; no reallocation, the dropped tail
    ///   becomes spare storage.
    /// - `len < new_len <= capacity`: grows in place; slots `[len..new_len)`
    ///   are overwritten with `T::default()` so stale spare content is never
    ///   exposed.
    /// - `new_len > capacity`: grows the capacity by the doubling policy to
    ///   at least `new_len`, moves the existing elements, and default-fills
    ///   the rest.
    pub fn resize(&mut self, new_len: usize) {
        if new_len <= self.len {
            self.len = new_len;
            return;
        }
        if new_len <= self.buf.len() {
            for i in self.len..new_len {
                self.buf[i] = T::default();
            }
            self.len = new_len;
            return;
        }
        self.reserve(grown_capacity(self.buf.len(), new_len));
        // Fresh slots are already T::default().
        self.len = new_len;
    }
}
