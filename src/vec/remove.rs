// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowVec};

// Core imports
use core::mem;

impl<T: Default> GrowVec<T> {
    /// Removes and returns the element at `index`, shifting the tail one slot
    /// to the left. O(len).
    ///
    /// Returns `None` when `index >= len` (removing at the one-past-the-end
    /// position is an ordinary out-of-bounds failure, not an append-side
    /// special case). Never shrinks the capacity.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let value = mem::take(&mut self.buf[index]);
        for i in index..self.len - 1 {
            self.buf[i] = mem::take(&mut self.buf[i + 1]);
        }
        self.len -= 1;
        Some(value)
    }

    /// Fallible variant of [`remove`](GrowVec::remove), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        self.remove(index).ok_or(Error::OutOfBounds)
    }
}
