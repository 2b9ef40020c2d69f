// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Rounds to the nearest whole number, with ties rounding up.
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
