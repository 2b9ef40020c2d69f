// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll position tracking with whole-pixel offsets and sub-pixel
//! accumulation.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::util::round_half_up;

/// Scroll position over a 1D extent, quantized to whole pixels.
///
/// The offset counts logical pixels scrolled from the start of the content
/// and is always a whole number; fractional scroll deltas accumulate in a
/// pending remainder until they amount to more than half a pixel. Deltas
/// follow the host gesture convention: a negative delta moves the viewport
/// toward the end of the content (the offset grows), a positive delta moves
/// it back toward the start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    offset: f64,
    viewport_size: f64,
    total_size: f64,
    pending_delta: f64,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    /// Creates a state at the start of an empty extent.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset: 0.0,
            viewport_size: 0.0,
            total_size: 0.0,
            pending_delta: 0.0,
        }
    }

    /// Whole pixels scrolled from the start of the content.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Height of the visible window, as of the last layout.
    #[must_use]
    pub fn viewport_size(&self) -> f64 {
        self.viewport_size
    }

    /// Total scrollable extent, as of the last layout.
    #[must_use]
    pub fn total_size(&self) -> f64 {
        self.total_size
    }

    /// The largest reachable offset: content past the viewport, or 0 when
    /// everything fits.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        (self.total_size - self.viewport_size).max(0.0)
    }

    /// Returns `true` if a positive delta (toward the start) can consume
    /// anything.
    #[must_use]
    pub fn can_scroll_forward(&self) -> bool {
        self.offset > 0.0
    }

    /// Returns `true` if a negative delta (toward the end) can consume
    /// anything.
    #[must_use]
    pub fn can_scroll_backward(&self) -> bool {
        self.offset < self.total_size - self.viewport_size
    }

    /// Updates the extents after a layout pass, re-clamping the offset if
    /// the content shrank underneath it.
    pub fn set_extents(&mut self, total_size: f64, viewport_size: f64) {
        debug_assert!(
            total_size >= 0.0 && viewport_size >= 0.0,
            "scroll extents must be non-negative; got total {total_size}, viewport {viewport_size}"
        );
        self.total_size = total_size;
        self.viewport_size = viewport_size;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Applies a scroll `delta` and returns how much of it was consumed.
    ///
    /// Deltas already at the content edge consume nothing. Otherwise the
    /// delta joins the pending remainder; once the remainder exceeds half a
    /// pixel the whole-pixel part moves the offset, clamped to the reachable
    /// range. A delta that was fully absorbed (even partly into the
    /// remainder) reports itself consumed; a clamped one reports only the
    /// pixels actually moved and drops the rest.
    pub fn on_scroll(&mut self, delta: f64) -> f64 {
        if (delta < 0.0 && !self.can_scroll_backward())
            || (delta > 0.0 && !self.can_scroll_forward())
        {
            return 0.0;
        }
        debug_assert!(
            self.pending_delta.abs() <= 0.5,
            "pending remainder exceeds half a pixel: {}",
            self.pending_delta
        );

        self.pending_delta += delta;
        if self.pending_delta.abs() > 0.5 {
            if self.pending_delta < 0.0 {
                let step = round_half_up(-self.pending_delta).min(self.max_offset() - self.offset);
                self.offset += step;
                self.pending_delta += step;
            } else {
                let step = round_half_up(self.pending_delta).min(self.offset);
                self.offset -= step;
                self.pending_delta -= step;
            }
        }

        if self.pending_delta.abs() <= 0.5 {
            delta
        } else {
            // The offset hit an edge; report the part that moved and drop
            // the remainder so the next gesture starts clean.
            let consumed = delta - self.pending_delta;
            self.pending_delta = 0.0;
            consumed
        }
    }

    /// Scrolls so the given offset from the start becomes the viewport top,
    /// clamped to the reachable range. Returns the consumed distance.
    pub fn scroll_to(&mut self, target: f64) -> f64 {
        self.on_scroll(self.offset - target)
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollState;

    fn laid_out(total: f64, viewport: f64) -> ScrollState {
        let mut state = ScrollState::new();
        state.set_extents(total, viewport);
        state
    }

    #[test]
    fn a_large_fling_clamps_to_the_end() {
        let mut state = laid_out(1000.0, 400.0);

        let consumed = state.on_scroll(-700.0);
        // Only 600 pixels of travel exist; the rest is dropped.
        assert_eq!(state.offset(), 600.0);
        assert_eq!(consumed, -600.0);
        assert!(!state.can_scroll_backward());
        assert!(state.can_scroll_forward());

        // A further push at the edge consumes nothing.
        assert_eq!(state.on_scroll(-50.0), 0.0);
        assert_eq!(state.offset(), 600.0);
    }

    #[test]
    fn zero_delta_is_inert() {
        let mut state = laid_out(1000.0, 400.0);
        assert_eq!(state.on_scroll(0.0), 0.0);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn sub_pixel_deltas_accumulate() {
        let mut state = laid_out(1000.0, 400.0);

        // 0.4 stays in the remainder but reports as consumed.
        assert_eq!(state.on_scroll(-0.4), -0.4);
        assert_eq!(state.offset(), 0.0);

        // 0.8 pending rounds to one whole pixel.
        assert_eq!(state.on_scroll(-0.4), -0.4);
        assert_eq!(state.offset(), 1.0);
    }

    #[test]
    fn direction_reversal_walks_back_to_the_start() {
        let mut state = laid_out(500.0, 200.0);
        state.on_scroll(-120.0);
        assert_eq!(state.offset(), 120.0);

        assert_eq!(state.on_scroll(80.0), 80.0);
        assert_eq!(state.offset(), 40.0);

        // Overshooting the start consumes only the available travel.
        assert_eq!(state.on_scroll(100.0), 40.0);
        assert_eq!(state.offset(), 0.0);
        assert!(!state.can_scroll_forward());
        assert_eq!(state.on_scroll(10.0), 0.0);
    }

    #[test]
    fn scroll_to_targets_an_absolute_offset() {
        let mut state = laid_out(1000.0, 400.0);
        state.scroll_to(250.0);
        assert_eq!(state.offset(), 250.0);

        state.scroll_to(0.0);
        assert_eq!(state.offset(), 0.0);

        // Targets past the end clamp.
        state.scroll_to(5000.0);
        assert_eq!(state.offset(), 600.0);
    }

    #[test]
    fn shrinking_content_reclamps_the_offset() {
        let mut state = laid_out(1000.0, 400.0);
        state.on_scroll(-600.0);
        assert_eq!(state.offset(), 600.0);

        state.set_extents(500.0, 400.0);
        assert_eq!(state.offset(), 100.0);

        // Content that fits entirely pins the offset to zero.
        state.set_extents(300.0, 400.0);
        assert_eq!(state.offset(), 0.0);
        assert_eq!(state.max_offset(), 0.0);
        assert!(!state.can_scroll_backward());
    }

    #[test]
    fn everything_fitting_means_no_scrolling_at_all() {
        let mut state = laid_out(200.0, 400.0);
        assert_eq!(state.on_scroll(-100.0), 0.0);
        assert_eq!(state.offset(), 0.0);
    }
}
