// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Table: renderer-agnostic data table layout.
//!
//! This crate lays out a data table with typed column width policies, pinned
//! header and footer rows, and a scrollable body, without knowing anything
//! about widgets or a particular UI framework. Hosts own cell content and
//! answer measurement queries through [`CellMeasurer`]; the crate answers
//! with concrete rectangles.
//!
//! The core pieces are:
//!
//! - [`TableBuilder`]: declares rows and cells for one layout pass, with
//!   cell counts validated against the column count as each row finishes.
//! - [`ColumnWidth`]: per-column width policies. `Fixed`, `Fraction`,
//!   content-driven `Wrap`/`MinIntrinsic`/`MaxIntrinsic`, weighted `Flex`,
//!   and pointwise `Min`/`Max` combinators.
//! - [`measure_table`]: the two-pass measurer. Pass one resolves column
//!   widths and distributes remaining space over flex columns; pass two
//!   measures cells at their final column width and takes row heights.
//! - [`place_table`]: turns measured geometry, a viewport, and a scroll
//!   offset into placed rows and cells, culling body rows outside the
//!   viewport and pinning headers and footers.
//!
//! All coordinates are `f64` logical pixels; unbounded dimensions are
//! [`f64::INFINITY`].
//!
//! # Example
//!
//! ```rust
//! use kurbo::Size;
//! use trellis_table::{
//!     CellMeasurer, CellRef, ColumnWidth, Constraints, LayoutDirection, TableBuilder,
//!     TableColumn, measure_table, place_table,
//! };
//!
//! // Every cell is 40 by 20 logical pixels.
//! struct Mono;
//!
//! impl CellMeasurer for Mono {
//!     fn measure(&mut self, _cell: CellRef, _constraints: Constraints) -> Size {
//!         Size::new(40.0, 20.0)
//!     }
//!     fn min_intrinsic_width(&mut self, _cell: CellRef, _height: f64) -> f64 {
//!         40.0
//!     }
//!     fn max_intrinsic_width(&mut self, _cell: CellRef, _height: f64) -> f64 {
//!         40.0
//!     }
//! }
//!
//! let columns = [
//!     TableColumn::new(ColumnWidth::Fixed(100.0)),
//!     TableColumn::new(ColumnWidth::Flex(1.0)),
//! ];
//! let mut builder = TableBuilder::new(2);
//! builder.rows(3, |r, _| {
//!     r.cell();
//!     r.cell();
//! })?;
//! let content = builder.finish();
//!
//! let constraints = Constraints::new(0.0, 400.0, 0.0, f64::INFINITY);
//! let measured = measure_table(&columns, &content, &constraints, &mut Mono, 0.0);
//! // The flex column grows from its 40 pixel base to fill the container.
//! assert_eq!(measured.column_widths.as_slice(), &[100.0, 300.0]);
//!
//! let placement = place_table(
//!     &columns,
//!     &content,
//!     &measured,
//!     f64::INFINITY,
//!     0.0,
//!     LayoutDirection::Ltr,
//! );
//! assert_eq!(placement.rows.len(), 3);
//! # Ok::<(), trellis_table::DeclarationError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Without the `std` feature the
//! `libm` feature must be enabled for floating point rounding.

#![no_std]

extern crate alloc;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("trellis_table requires either the `std` or `libm` feature");

mod builder;
mod column;
mod error;
mod measurable;
mod measure;
mod place;
mod types;
mod util;
mod width;

pub use builder::{RowBuilder, RowEntry, TableBuilder, TableContent};
pub use column::{ColumnWidth, SortState, TableColumn};
pub use error::DeclarationError;
pub use measurable::{CellMeasurer, CellSizes};
pub use measure::{MeasuredTable, measure_table};
pub use place::{PlacedCell, PlacedRow, TablePlacement, place_table};
pub use types::{
    CellAlignment, CellRef, Constraints, HorizontalAlignment, LayoutDirection, Rgba, RowFlags,
    VerticalAlignment,
};
pub use width::{ResolvedColumns, resolve_column_widths};
