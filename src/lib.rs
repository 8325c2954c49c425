// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `grow-vec`
//!
//! A heap-allocated, growable vector type with amortized-doubling capacity
//! growth, **with no `unsafe` anywhere**.
//!
//! The core type, [`GrowVec<T>`], owns a contiguous heap buffer of `capacity`
//! element slots and tracks a logical length `len ∈ 0..=capacity`. It behaves
//! like a simplified `Vec`: contiguous, index-addressable storage that grows
//! automatically on `push`/`insert`/`resize` and supports explicit capacity
//! reservation via [`GrowVec::with_capacity`] and [`GrowVec::reserve`].
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You are in a `no_std` + `alloc` environment.
//! - You want a vector whose every operation is expressible in safe Rust
//!   (`#![forbid(unsafe_code)]`).
//! - Your element types implement `Default`, which the safe storage strategy
//!   relies on (see below).
//!
//! It may not be the best fit if:
//!
//! - Your elements do not implement `Default` (slots are default-initialized
//!   when a buffer is allocated).
//! - You need `Vec`'s full API surface or its exact allocation behavior.
//!
//! ## Storage model and safety
//!
//! The backing storage is an [`OwnedBuf<T>`]: a move-only newtype over
//! `Box<[T]>` holding exactly `capacity` default-initialized slots. Because
//! every allocated slot always holds a valid `T`, no `MaybeUninit` bookkeeping
//! is needed and the crate forbids `unsafe` outright. Elements are moved
//! between buffers with `mem::take`, which is why mutating operations carry a
//! `T: Default` bound.
//!
//! The container maintains a single structural invariant: the buffer holds
//! exactly `capacity` slots, so `len <= capacity` cannot be violated by
//! construction. Slots `[0, len)` are the logical elements; slots
//! `[len, capacity)` are spare storage with unspecified content. Operations
//! that grow `len` overwrite the newly exposed slots, so stale values are
//! never observable.
//!
//! ## Growth policy
//!
//! When more room is needed, capacity is doubled repeatedly until it meets the
//! required size, starting from 1 when the capacity is 0. This bounds the
//! total element-move work of `N` sequential pushes to `O(N)`.
//!
//! ## Errors and panics
//!
//! - Indexing (`v[i]`, `v[a..b]`, …) follows slice semantics and **panics**
//!   on out-of-bounds, exactly like built-in slices.
//! - The checked accessors [`GrowVec::try_get`] / [`GrowVec::try_get_mut`] and
//!   the position-taking mutators [`GrowVec::insert`] / [`GrowVec::try_remove`]
//!   return [`Error::OutOfBounds`] instead, leaving the vector unchanged.
//! - Capacity never produces an error: the vector grows.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `GrowVec<T>`.
//!   - Serializes as a plain sequence; deserializes from any sequence,
//!     growing as needed.
//!
//! ## Example
//!
//! ```rust
//! use grow_vec::GrowVec;
//!
//! let mut v: GrowVec<u8> = GrowVec::new();
//! v.push(1);
//! v.push(2);
//! v.push(3);
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! assert_eq!(v.capacity(), 4); // 0 -> 1 -> 2 -> 4
//! ```
//!
//! See [`GrowVec`] for detailed semantics, complexity, and limitations, and
//! [`OwnedBuf`] for the buffer contract.

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod buf;
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use buf::OwnedBuf;
pub use error::Error;
pub use iter::IntoIter;
pub use vec::GrowVec;
