// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `GrowVec` type and its inherent API.
//!
//! `GrowVec<T>` is a heap-backed growable vector. It owns a buffer of exactly
//! `capacity` element slots and tracks a logical length. Methods generally
//! mirror slice/vector semantics, with explicit growth instead of capacity
//! errors and fallible variants where a position argument can be invalid.

mod from;
mod grow;
mod insert;
mod new;
mod pop;
mod push;
mod remove;
mod slice;

// Crate imports
use crate::{buf::OwnedBuf, error::Error};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Deref, DerefMut},
};

/// A heap-allocated, growable vector with amortized-doubling capacity growth.
///
/// `GrowVec<T>` stores its elements in an exclusively owned heap buffer of
/// `capacity` slots and tracks a logical length `len ∈ 0..=capacity`:
///
/// - capacity grows automatically (doubling, starting at 1) on `push`,
///   `insert`, and growing `resize`;
/// - capacity can be pre-set with [`with_capacity`](GrowVec::with_capacity)
///   and extended explicitly with [`reserve`](GrowVec::reserve);
/// - the vector has value semantics: [`Clone`] deep-copies, a move transfers
///   buffer ownership, and [`take`](GrowVec::take) moves the contents out
///   while resetting the source to empty;
/// - no `unsafe` is used anywhere.
///
/// # Layout and invariants
///
/// Internally, `GrowVec<T>` maintains:
///
/// - a backing [`OwnedBuf<T>`] holding exactly `capacity` slots; and
/// - a logical length `len` with `0 <= len <= capacity`.
///
/// The capacity is not stored separately: it *is* the buffer length, so the
/// `len <= capacity` invariant cannot be broken by a stale field. Only the
/// prefix `[0..len)` is visible through safe APIs ([`as_slice`],
/// [`as_mut_slice`], indexing, iteration). Slots `[len..capacity)` are spare
/// storage with unspecified content; every operation that grows `len`
/// overwrites the newly exposed slots before they become visible.
///
/// # Element bounds
///
/// - Operations that allocate or move slots between buffers require
///   `T: Default`: slots are default-initialized on allocation, and elements
///   are moved with `mem::take`. This is what keeps the crate free of
///   `unsafe`.
/// - Operations that duplicate elements ([`Clone`], [`From<&[T]>`],
///   [`from_elem`](GrowVec::from_elem)) additionally require `T: Clone`.
///
/// # Complexity characteristics
///
/// - [`push`](GrowVec::push) is amortized O(1): growth doubles the capacity,
///   so N pushes move O(N) elements in total.
/// - [`pop`](GrowVec::pop), [`clear`](GrowVec::clear),
///   [`truncate`](GrowVec::truncate), and [`swap_with`](GrowVec::swap_with)
///   are O(1).
/// - [`insert`](GrowVec::insert) and [`remove`](GrowVec::remove) are O(len).
///   `insert` always moves the elements into a freshly allocated buffer, even
///   when spare capacity exists (see its docs).
/// - [`reserve`](GrowVec::reserve) and a reallocating
///   [`resize`](GrowVec::resize) move all `len` elements once.
///
/// # Fallible vs panicking operations
///
/// Only index/range errors panic, with slice semantics. Position-taking
/// operations ([`insert`](GrowVec::insert), [`try_remove`](GrowVec::try_remove),
/// [`try_get`](GrowVec::try_get)) return [`Error::OutOfBounds`] and leave the
/// vector unchanged. Capacity is never an error: the vector grows.
///
/// # Examples
///
/// ```rust
/// use grow_vec::GrowVec;
///
/// let mut v: GrowVec<i32> = GrowVec::from(&[1, 2, 4][..]);
/// v.insert(2, 3).unwrap();
/// assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
/// assert_eq!(v.remove(2), Some(3));
/// assert_eq!(v.as_slice(), &[1, 2, 4]);
/// ```
///
/// For a higher-level overview, see the crate-level documentation in
/// [`lib`](crate).
///
/// [`as_slice`]: GrowVec::as_slice
/// [`as_mut_slice`]: GrowVec::as_mut_slice
pub struct GrowVec<T> {
    pub(crate) buf: OwnedBuf<T>,
    pub(crate) len: usize,
}

impl<T> GrowVec<T> {
    /// Returns the number of allocated storage slots (always `>= len`).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the current logical length (`0..=capacity`).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`, the room left before the next reallocation.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.buf.len() - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Checked access: returns [`Error::OutOfBounds`] when `i >= len`.
    ///
    /// For all `i < len`, `v.try_get(i)` agrees with `&v[i]`.
    #[inline]
    pub fn try_get(&self, i: usize) -> Result<&T, Error> {
        self.get(i).ok_or(Error::OutOfBounds)
    }

    /// Checked mutable access: returns [`Error::OutOfBounds`] when `i >= len`.
    #[inline]
    pub fn try_get_mut(&mut self, i: usize) -> Result<&mut T, Error> {
        self.get_mut(i).ok_or(Error::OutOfBounds)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns `true` if the vector contains `x` (linear search).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T> GrowVec<T> {
    /// Sets `len = 0` without touching capacity or slot contents. O(1).
    ///
    /// Calling `clear` again is a no-op.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Shrinks to `new_len` if `new_len < len`; otherwise a no-op.
    ///
    /// Never reallocates; the dropped tail becomes spare storage.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }

    /// Exchanges length and buffer ownership with `other` in O(1).
    ///
    /// No element-wise work is done.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(&mut self.len, &mut other.len);
        self.buf.swap_with(&mut other.buf);
    }

    /// Moves the contents out, leaving `self` empty with zero capacity.
    ///
    /// The returned vector owns the original buffer; `self` holds no
    /// allocation afterwards, exactly as if it were freshly constructed.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }
}

impl<T> Default for GrowVec<T> {
    /// The empty vector: `len == 0`, `capacity == 0`, no allocation.
    fn default() -> Self {
        Self {
            buf: OwnedBuf::default(),
            len: 0,
        }
    }
}

impl<T: Clone + Default> Clone for GrowVec<T> {
    /// Deep copy: a fresh buffer of the source's capacity, with the `len`
    /// elements cloned in order. The spare slots of the copy are
    /// default-initialized, not cloned.
    fn clone(&self) -> Self {
        let mut buf = OwnedBuf::with_capacity(self.capacity());
        for (slot, value) in buf.as_mut_slice().iter_mut().zip(self.as_slice()) {
            *slot = value.clone();
        }
        Self { buf, len: self.len }
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    /// Length first, then element-wise in order (slice equality).
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for GrowVec<T> {}
impl<T: Ord> Ord for GrowVec<T> {
    /// Lexicographic over the element sequence; a strict prefix is smaller.
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for GrowVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for GrowVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for GrowVec<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for GrowVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for GrowVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for GrowVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for GrowVec<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for GrowVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
