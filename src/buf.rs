// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The owned-buffer collaborator backing [`GrowVec`](crate::GrowVec).
//!
//! [`OwnedBuf<T>`] owns a contiguous heap allocation of exactly `len()`
//! default-initialized element slots. It is move-only (no `Clone`), supports
//! indexed read/write over its slots, and swaps with another buffer in O(1).
//! All manual-memory concern lives behind `Box<[T]>`; the container above it
//! operates purely on lengths and this contract.

// Core imports
use core::{
    fmt, mem,
    ops::{Index, IndexMut},
};

// Alloc imports
use alloc::boxed::Box;

/// An exclusively owned, fixed-size block of default-initialized element slots.
///
/// - [`with_capacity`](OwnedBuf::with_capacity) allocates exactly the
///   requested number of slots, each set to `T::default()`; capacity 0
///   allocates nothing (an empty boxed slice).
/// - Ownership is exclusive and transfer is move-only: the type deliberately
///   does not implement `Clone`, and after a move the source no longer exists.
/// - [`Default`] is the empty buffer, also allocation-free.
/// - Indexing panics when the position is outside the allocated slots.
/// - The allocation is released on drop, like any `Box`.
///
/// Unlike the container's indexing, which is restricted to the logical prefix,
/// `OwnedBuf` indexing spans *all* allocated slots: the distinction between
/// "element" and "spare storage" is the container's concern, not the buffer's.
pub struct OwnedBuf<T> {
    slots: Box<[T]>,
}

impl<T: Default> OwnedBuf<T> {
    /// Allocates a buffer of exactly `capacity` slots, each `T::default()`.
    pub fn with_capacity(capacity: usize) -> Self {
        let slots = (0..capacity).map(|_| T::default()).collect();
        Self { slots }
    }
}

impl<T> OwnedBuf<T> {
    /// Returns the number of allocated slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slots are allocated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns all allocated slots as a shared slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Returns all allocated slots as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Exchanges allocations with `other` in O(1), no element-wise work.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(&mut self.slots, &mut other.slots);
    }
}

impl<T> Default for OwnedBuf<T> {
    fn default() -> Self {
        Self {
            slots: Box::default(),
        }
    }
}

impl<T> Index<usize> for OwnedBuf<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.slots[i]
    }
}

impl<T> IndexMut<usize> for OwnedBuf<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.slots[i]
    }
}

impl<T: fmt::Debug> fmt::Debug for OwnedBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedBuf")
            .field("capacity", &self.slots.len())
            .field("slots", &&*self.slots)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::OwnedBuf;

    #[test]
    fn test_with_capacity_default_fills() {
        let b: OwnedBuf<i32> = OwnedBuf::with_capacity(4);
        assert_eq!(b.len(), 4);
        assert_eq!(b.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_zero_capacity_is_empty() {
        let b: OwnedBuf<i32> = OwnedBuf::with_capacity(0);
        assert_eq!(b.len(), 0);
        assert!(b.is_empty());

        let d: OwnedBuf<i32> = OwnedBuf::default();
        assert!(d.is_empty());
    }

    #[test]
    fn test_index_read_write() {
        let mut b: OwnedBuf<i32> = OwnedBuf::with_capacity(3);
        b[0] = 10;
        b[2] = 30;
        assert_eq!(b[0], 10);
        assert_eq!(b[1], 0);
        assert_eq!(b[2], 30);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_capacity_panics() {
        let b: OwnedBuf<i32> = OwnedBuf::with_capacity(2);
        let _ = b[2];
    }

    #[test]
    fn test_swap_with_exchanges_allocations() {
        let mut a: OwnedBuf<i32> = OwnedBuf::with_capacity(2);
        let mut b: OwnedBuf<i32> = OwnedBuf::with_capacity(5);
        a[0] = 1;
        b[0] = 9;

        a.swap_with(&mut b);

        assert_eq!(a.len(), 5);
        assert_eq!(a[0], 9);
        assert_eq!(b.len(), 2);
        assert_eq!(b[0], 1);
    }

    #[test]
    fn test_move_transfers_ownership() {
        let mut a: OwnedBuf<i32> = OwnedBuf::with_capacity(3);
        a[1] = 7;
        let b = a; // move; `a` is gone at compile time
        assert_eq!(b[1], 7);
    }

    #[test]
    fn test_debug_contains_capacity() {
        let b: OwnedBuf<i32> = OwnedBuf::with_capacity(2);
        let dbg = format!("{b:?}");
        assert!(dbg.contains("OwnedBuf"));
        assert!(dbg.contains("capacity"));
    }

    #[test]
    fn test_zero_sized_type_slots() {
        let b: OwnedBuf<()> = OwnedBuf::with_capacity(4);
        assert_eq!(b.len(), 4);
    }
}
