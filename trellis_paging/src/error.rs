// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by invalid pagination configuration.

use core::fmt;

/// An invalid pagination parameter.
///
/// All variants are configuration mistakes caught up front; page navigation
/// itself never fails, it clamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PagingError {
    /// A page size of zero was requested.
    ZeroPageSize,
    /// A fit-to-height policy was given a row height of zero or less.
    NonPositiveRowHeight(f64),
    /// A fit-to-height policy was given a non-finite height.
    NonFiniteHeight(f64),
}

impl fmt::Display for PagingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroPageSize => write!(f, "page size must be at least 1"),
            Self::NonPositiveRowHeight(height) => {
                write!(f, "row height must be positive; got {height}")
            }
            Self::NonFiniteHeight(height) => {
                write!(f, "heights must be finite; got {height}")
            }
        }
    }
}

impl core::error::Error for PagingError {}
