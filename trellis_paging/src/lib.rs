// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Paging: pagination over table content.
//!
//! Instead of scrolling a long body, a paginated table shows one page of
//! rows at a time. This crate keeps the page position, decides how many
//! rows a page holds, and slices row declaration down to the current page:
//!
//! - [`PageState`]: page index, page size, and row count, with clamped
//!   navigation and persistable [`PageState::to_parts`] output.
//! - [`PageSizePolicy`]: fixed page sizes, or as many uniform rows as fit
//!   in the viewport after the pinned chrome.
//! - [`PagedTableBuilder`] *(feature `table`, on by default)*: wraps a
//!   `trellis_table` declaration builder, realizing only the body rows on
//!   the current page while counting them all.
//!
//! # Example
//!
//! ```rust
//! use trellis_paging::{PageState, PagedTableBuilder};
//! use trellis_table::TableBuilder;
//!
//! let mut state = PageState::new(5)?;
//! state.set_count(23);
//! state.last_page();
//!
//! let mut builder = TableBuilder::new(1);
//! let mut paged = PagedTableBuilder::new(&mut builder, state.window());
//! paged.rows(23, |r, i| {
//!     r.key(i as u64).cell();
//! }).unwrap();
//!
//! state.set_count(paged.total_declared());
//! let content = builder.finish();
//! // The last page holds the 3 remaining rows of 23.
//! assert_eq!(content.rows().len(), 3);
//! assert_eq!(state.page_count(), 5);
//! # Ok::<(), trellis_paging::PagingError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("trellis_paging requires either the `std` or `libm` feature");

mod error;
#[cfg(feature = "table")]
mod paged_builder;
mod policy;
mod state;
mod window;

pub use error::PagingError;
#[cfg(feature = "table")]
pub use paged_builder::PagedTableBuilder;
pub use policy::PageSizePolicy;
pub use state::PageState;
pub use window::PageWindow;
