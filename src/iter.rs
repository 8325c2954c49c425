// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`GrowVec`](crate::GrowVec).
//!
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&GrowVec` and `&mut GrowVec` iterate as slices.

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::{iter::FusedIterator, mem};

/// Owned iterator returned by `GrowVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`]. Elements are taken out of the owned
/// buffer with `mem::take`, hence the `T: Default` bound; the buffer is
/// released when the iterator is dropped.
pub struct IntoIter<T> {
    pub(crate) v: GrowVec<T>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T: Default> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            Some(mem::take(&mut self.v.buf[i]))
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        if n >= rem {
            self.front = self.back;
            return None;
        }
        let i = self.front + n; // safe: n < rem == back - front
        self.front = i + 1;
        Some(mem::take(&mut self.v.buf[i]))
    }
}

impl<T: Default> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            Some(mem::take(&mut self.v.buf[self.back]))
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        if n >= rem {
            self.front = self.back;
            None
        } else {
            self.back -= n + 1;
            Some(mem::take(&mut self.v.buf[self.back]))
        }
    }
}
impl<T: Default> FusedIterator for IntoIter<T> {}
impl<T: Default> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T: Default> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            front: 0,
            back: self.len,
            v: self,
        }
    }
}
