// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::mem;

impl<T: Default> GrowVec<T> {
    /// Removes and returns the last element, or `None` when empty.
    ///
    /// Never shrinks the capacity. The vacated slot becomes spare storage
    /// with unspecified content.
    #[inline]
    #[must_use]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(mem::take(&mut self.buf[self.len]))
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::GrowVec;

    #[test]
    fn test_pop_returns_last_in_reverse_order() {
        let mut v: GrowVec<i32> = GrowVec::from(&[1, 2, 3][..]);
        assert_eq!(v.pop(), Some(3));
        assert_eq!(v.pop(), Some(2));
        assert_eq!(v.pop(), Some(1));
        assert_eq!(v.pop(), None);
    }

    #[test]
    fn test_pop_on_empty_is_permissive() {
        let mut v: GrowVec<i32> = GrowVec::new();
        assert_eq!(v.pop(), None);
        assert_eq!(v.len(), 0);

        let mut reserved: GrowVec<i32> = GrowVec::with_capacity(4);
        assert_eq!(reserved.pop(), None);
        assert_eq!(reserved.capacity(), 4);
    }

    #[test]
    fn test_pop_keeps_capacity() {
        let mut v: GrowVec<i32> = GrowVec::from(&[1, 2, 3, 4][..]);
        let cap = v.capacity();
        while v.pop().is_some() {}
        assert_eq!(v.capacity(), cap);
        assert!(v.is_empty());
    }
}
