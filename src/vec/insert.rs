// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    buf::OwnedBuf,
    error::Error,
    vec::{grow::grown_capacity, GrowVec},
};

// Core imports
use core::mem;

impl<T: Default> GrowVec<T> {
    /// Inserts `value` at `index`, shifting the tail one slot to the right,
    /// and returns a reference to the inserted element.
    ///
    /// `index == len` appends. Returns [`Error::OutOfBounds`] if
    /// `index > len`; the vector is unchanged on error.
    ///
    /// The elements are always moved into a freshly allocated buffer sized by
    /// the doubling policy against `len + 1`, even when spare capacity would
    /// allow shifting in place. The resulting length and capacity are the
    /// same either way; only the allocation behavior differs. O(len).
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut T, Error> {
        if index > self.len {
            return Err(Error::OutOfBounds);
        }

        let mut next = OwnedBuf::with_capacity(grown_capacity(self.buf.len(), self.len + 1));
        for i in 0..index {
            next[i] = mem::take(&mut self.buf[i]);
        }
        next[index] = value;
        for i in index..self.len {
            next[i + 1] = mem::take(&mut self.buf[i]);
        }

        self.buf = next;
        self.len += 1;
        Ok(&mut self.buf[index])
    }
}
