// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Policies deciding how many rows fit on a page.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::PagingError;

/// How the page size is chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageSizePolicy {
    /// Always this many rows per page.
    Fixed(usize),
    /// As many uniform-height rows as fit in the viewport after subtracting
    /// the pinned chrome, but never fewer than one.
    FitRemainingHeight {
        /// Height of the pinned header block.
        header_height: f64,
        /// Height of the pinned footer block.
        footer_height: f64,
        /// Height of one body row including its separator.
        row_height: f64,
    },
}

impl PageSizePolicy {
    /// Checks the policy's parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PagingError::ZeroPageSize`] for a fixed size of zero,
    /// [`PagingError::NonFiniteHeight`] for a non-finite height, and
    /// [`PagingError::NonPositiveRowHeight`] for a row height of zero or
    /// less.
    pub fn validate(&self) -> Result<(), PagingError> {
        match *self {
            Self::Fixed(0) => Err(PagingError::ZeroPageSize),
            Self::Fixed(_) => Ok(()),
            Self::FitRemainingHeight {
                header_height,
                footer_height,
                row_height,
            } => {
                for height in [header_height, footer_height, row_height] {
                    if !height.is_finite() {
                        return Err(PagingError::NonFiniteHeight(height));
                    }
                }
                if row_height <= 0.0 {
                    return Err(PagingError::NonPositiveRowHeight(row_height));
                }
                Ok(())
            }
        }
    }

    /// The page size for a viewport of the given height.
    ///
    /// Fixed policies ignore the viewport. Fit policies divide the height
    /// left after the pinned chrome by the row height, rounding down, and
    /// never report fewer than one row per page.
    #[must_use]
    pub fn page_size_for_viewport(&self, viewport_height: f64) -> usize {
        match *self {
            Self::Fixed(size) => size,
            Self::FitRemainingHeight {
                header_height,
                footer_height,
                row_height,
            } => {
                let remaining = viewport_height - header_height - footer_height;
                let rows = (remaining / row_height).floor().max(1.0);
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "floored and clamped to at least 1 before the cast"
                )]
                let rows = rows as usize;
                rows
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PageSizePolicy;
    use crate::PagingError;

    #[test]
    fn fit_divides_the_leftover_height() {
        // 500 high viewport, 56 of header and footer chrome each, 52 per
        // row: floor(388 / 52) = 7.
        let policy = PageSizePolicy::FitRemainingHeight {
            header_height: 56.0,
            footer_height: 56.0,
            row_height: 52.0,
        };
        policy.validate().unwrap();
        assert_eq!(policy.page_size_for_viewport(500.0), 7);
        // A viewport smaller than the chrome still shows one row.
        assert_eq!(policy.page_size_for_viewport(80.0), 1);
    }

    #[test]
    fn fixed_ignores_the_viewport() {
        let policy = PageSizePolicy::Fixed(10);
        policy.validate().unwrap();
        assert_eq!(policy.page_size_for_viewport(0.0), 10);
    }

    #[test]
    fn bad_parameters_are_rejected_up_front() {
        assert_eq!(
            PageSizePolicy::Fixed(0).validate(),
            Err(PagingError::ZeroPageSize)
        );
        assert_eq!(
            PageSizePolicy::FitRemainingHeight {
                header_height: 0.0,
                footer_height: 0.0,
                row_height: 0.0,
            }
            .validate(),
            Err(PagingError::NonPositiveRowHeight(0.0))
        );
        assert_eq!(
            PageSizePolicy::FitRemainingHeight {
                header_height: f64::INFINITY,
                footer_height: 0.0,
                row_height: 52.0,
            }
            .validate(),
            Err(PagingError::NonFiniteHeight(f64::INFINITY))
        );
    }
}
