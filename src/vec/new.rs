// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buf::OwnedBuf, vec::GrowVec};

impl<T> GrowVec<T> {
    /// Constructs an empty vector. No allocation is performed.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs an empty vector with `capacity` slots pre-allocated.
    ///
    /// The length is 0; the first `capacity` pushes will not reallocate.
    /// The buffer is allocated eagerly, default-initialized.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self
    where
        T: Default,
    {
        Self {
            buf: OwnedBuf::with_capacity(capacity),
            len: 0,
        }
    }

    /// Constructs a vector of `len` elements, each `T::default()`.
    ///
    /// Capacity equals `len` exactly.
    #[inline]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self {
            buf: OwnedBuf::with_capacity(len),
            len,
        }
    }

    /// Constructs a vector of `len` elements, each a clone of `value`.
    ///
    /// Capacity equals `len` exactly. The clones are assigned over the
    /// default-initialized storage.
    #[inline]
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone + Default,
    {
        let mut v = Self::with_len(len);
        for slot in v.as_mut_slice() {
            *slot = value.clone();
        }
        v
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::GrowVec;

    #[test]
    fn test_with_capacity_is_logically_empty() {
        let v: GrowVec<i32> = GrowVec::with_capacity(6);
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 6);
        assert!(v.is_empty());
        assert_eq!(v.as_slice(), &[] as &[i32]);
    }

    #[test]
    fn test_with_capacity_zero_matches_new() {
        let v: GrowVec<i32> = GrowVec::with_capacity(0);
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn test_with_len_default_values() {
        let v: GrowVec<i32> = GrowVec::with_len(4);
        assert_eq!(v.len(), 4);
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_from_elem_fills_with_value() {
        let v: GrowVec<i32> = GrowVec::from_elem(3, 7);
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.as_slice(), &[7, 7, 7]);
    }

    #[test]
    fn test_from_elem_zero_len() {
        let v: GrowVec<i32> = GrowVec::from_elem(0, 7);
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn test_with_capacity_pushes_do_not_reallocate() {
        let mut v: GrowVec<i32> = GrowVec::with_capacity(3);
        v.push(1);
        v.push(2);
        v.push(3);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }
}
