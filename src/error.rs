// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `GrowVec`.
//!
//! A growing vector has no capacity failures, so the only recoverable error
//! is a bounds condition. The error is `Copy` and implements
//! `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`GrowVec`](crate::GrowVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An index or position was out of the current logical bounds.
    OutOfBounds,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("index out of bounds"),
        }
    }
}

impl CoreError for Error {}
