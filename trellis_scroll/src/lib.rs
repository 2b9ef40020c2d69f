// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Scroll: scroll state for table viewports.
//!
//! This crate tracks a 1D scroll position over a scrollable extent, the way
//! a table body scrolls under pinned header and footer rows. It knows
//! nothing about tables or rendering; the host feeds it extents from layout
//! and gesture deltas from input.
//!
//! - [`ScrollState`]: the core protocol. Whole-pixel offsets, sub-pixel
//!   remainder accumulation, edge clamping, and partial-consumption
//!   reporting for nested-scroll hosts.
//! - [`ScrollController`]: gates a [`ScrollState`] on layout. Requests
//!   arriving before the first layout are buffered and replayed in order,
//!   and gesture sessions supersede one another for fling cancellation.
//!
//! Deltas use the gesture sign convention: negative moves toward the end of
//! the content, positive back toward the start.
//!
//! # Example
//!
//! ```rust
//! use trellis_scroll::ScrollState;
//!
//! let mut state = ScrollState::new();
//! state.set_extents(1000.0, 400.0);
//!
//! // A fling past the end consumes only the travel that exists.
//! let consumed = state.on_scroll(-700.0);
//! assert_eq!(state.offset(), 600.0);
//! assert_eq!(consumed, -600.0);
//!
//! // Sub-pixel deltas accumulate until they amount to a whole pixel.
//! state.scroll_to(0.0);
//! state.on_scroll(-0.3);
//! assert_eq!(state.offset(), 0.0);
//! state.on_scroll(-0.3);
//! assert_eq!(state.offset(), 1.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Without the `std` feature the
//! `libm` feature must be enabled for floating point rounding.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("trellis_scroll requires either the `std` or `libm` feature");

mod controller;
mod state;
mod util;

pub use controller::{ScrollController, ScrollRequest, ScrollSession};
pub use state::ScrollState;
