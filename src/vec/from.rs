// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buf::OwnedBuf, vec::GrowVec};

impl<T: Default, const N: usize> From<[T; N]> for GrowVec<T> {
    /// Moves the array elements in; capacity equals `N` exactly.
    fn from(src: [T; N]) -> Self {
        let mut buf = OwnedBuf::with_capacity(N);
        for (i, value) in src.into_iter().enumerate() {
            buf[i] = value;
        }
        Self { buf, len: N }
    }
}

impl<T: Clone + Default, const N: usize> From<&[T; N]> for GrowVec<T> {
    fn from(src: &[T; N]) -> Self {
        Self::from(&src[..])
    }
}

impl<T: Clone + Default> From<&[T]> for GrowVec<T> {
    /// Clones the slice elements in order; capacity equals the slice length.
    fn from(src: &[T]) -> Self {
        let mut buf = OwnedBuf::with_capacity(src.len());
        buf.as_mut_slice().clone_from_slice(src);
        Self {
            buf,
            len: src.len(),
        }
    }
}

impl<T: Default> FromIterator<T> for GrowVec<T> {
    /// Collects all elements, pre-reserving from the iterator's size hint.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let it = iter.into_iter();
        let mut v = Self::new();
        v.reserve(it.size_hint().0);
        for item in it {
            v.push(item);
        }
        v
    }
}

impl<T: Default> Extend<T> for GrowVec<T> {
    /// Appends all elements, pre-reserving from the iterator's size hint.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let it = iter.into_iter();
        let (lower, _) = it.size_hint();
        if lower > self.spare_capacity() {
            self.reserve(self.len + lower);
        }
        for item in it {
            self.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::GrowVec;

    #[test]
    fn test_from_array_moves_elements() {
        let v: GrowVec<i32> = GrowVec::from([1, 2, 3]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_from_array_ref_and_slice() {
        let arr = [10, 20];
        let v: GrowVec<i32> = GrowVec::from(&arr);
        assert_eq!(v.as_slice(), &[10, 20]);

        let s: GrowVec<i32> = GrowVec::from(&[5, 6, 7][..]);
        assert_eq!(s.as_slice(), &[5, 6, 7]);
        assert_eq!(s.capacity(), 3);
    }

    #[test]
    fn test_from_empty_sources() {
        let v: GrowVec<i32> = GrowVec::from([]);
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 0);

        let s: GrowVec<i32> = GrowVec::from(&[][..]);
        assert!(s.is_empty());
    }

    #[test]
    fn test_from_iterator_collects_in_order() {
        let v: GrowVec<i32> = (0..5).collect();
        assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4]);
        // Exact size hint means a single allocation of exactly 5.
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    fn test_from_iterator_with_loose_hint_still_collects_all() {
        // filter() lowers the size hint's lower bound to 0.
        let v: GrowVec<i32> = (0..10).filter(|x| x % 2 == 0).collect();
        assert_eq!(v.as_slice(), &[0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_extend_appends_after_existing() {
        let mut v: GrowVec<i32> = GrowVec::from(&[1, 2][..]);
        v.extend([3, 4, 5]);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_extend_within_spare_capacity_does_not_reallocate() {
        let mut v: GrowVec<i32> = GrowVec::with_capacity(8);
        v.push(1);
        v.extend([2, 3]);
        assert_eq!(v.capacity(), 8);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_extend_empty_iterator_is_noop() {
        let mut v: GrowVec<i32> = GrowVec::from(&[1, 2][..]);
        let cap = v.capacity();
        v.extend(core::iter::empty());
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.capacity(), cap);
    }
}
