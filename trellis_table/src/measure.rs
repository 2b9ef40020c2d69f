// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two-pass table measurer: column widths first, then row heights.

use alloc::vec::Vec;
use kurbo::Size;
use smallvec::SmallVec;

use crate::measurable::{CellMeasurer, CellSizes};
use crate::width::resolve_column_widths;
use crate::{CellRef, Constraints, TableColumn, TableContent};

/// Fully measured table geometry, ready for placement.
///
/// Produced by [`measure_table`]; placement consumes it without measuring
/// anything further.
#[derive(Clone, Debug)]
pub struct MeasuredTable {
    /// Final width of each column, in column order.
    pub column_widths: SmallVec<[f64; 8]>,
    /// Measured height of each row, in declaration order. A row's declared
    /// fixed height overrides its measured maximum.
    pub row_heights: Vec<f64>,
    /// The table's reported size after clamping into the constraints.
    pub table_size: Size,
    /// Total height of header rows and their separators.
    pub header_height: f64,
    /// Total height of footer rows and their separators.
    pub footer_height: f64,
    /// Total height of body rows and their separators: the scrollable extent.
    pub body_height: f64,
    /// Height added below every row for its separator.
    pub separator_height: f64,
    /// Per-cell measured sizes, for hosts that place cell content themselves.
    pub cell_sizes: CellSizes,
}

impl MeasuredTable {
    /// Measured size of one cell, if the table has such a cell.
    #[must_use]
    pub fn cell_size(&self, cell: CellRef) -> Option<Size> {
        self.cell_sizes.get(cell)
    }

    /// Height one row occupies including its separator.
    #[must_use]
    pub fn slot_height(&self, row: usize) -> f64 {
        self.row_heights[row] + self.separator_height
    }

    /// Scrollable extent and visible window height for a viewport.
    ///
    /// Returns `(total, viewport)` for the scroll state: the total is the
    /// body height (pinned rows never scroll) and the viewport is the given
    /// height minus the pinned chrome, floored at zero.
    #[must_use]
    pub fn scroll_extents(&self, viewport_height: f64) -> (f64, f64) {
        let window = (viewport_height - self.header_height - self.footer_height).max(0.0);
        (self.body_height, window)
    }
}

/// Measures the whole table under `constraints`.
///
/// Pass one resolves column widths (see
/// [`resolve_column_widths`](crate::resolve_column_widths)); pass two
/// measures every cell at its column's final width and takes each row's
/// height as the tallest cell, unless the row declared a fixed height.
/// Cells already measured during width resolution are not measured again.
///
/// The reported width is the larger of the constraint minimum and the sum
/// of column widths, so the table may report wider than its container and
/// overflow horizontally rather than squeeze columns below their resolved
/// widths.
pub fn measure_table<M: CellMeasurer>(
    columns: &[TableColumn],
    content: &TableContent,
    constraints: &Constraints,
    measurer: &mut M,
    separator_height: f64,
) -> MeasuredTable {
    debug_assert!(
        separator_height.is_finite() && separator_height >= 0.0,
        "separator height must be finite and non-negative; got {separator_height}"
    );

    let mut cell_sizes = CellSizes::new(columns.len());
    let resolved = resolve_column_widths(columns, content, constraints, measurer, &mut cell_sizes);

    let mut row_heights = Vec::with_capacity(content.rows().len());
    let mut header_height = 0.0;
    let mut footer_height = 0.0;
    let mut body_height = 0.0;

    for (row, entry) in content.rows().iter().enumerate() {
        let mut tallest: f64 = 0.0;
        for (column, width) in resolved.widths.iter().enumerate() {
            let cell = CellRef::new(row, column);
            let size = match cell_sizes.get(cell) {
                Some(size) => size,
                None => {
                    let size = measurer
                        .measure(cell, Constraints::new(0.0, *width, 0.0, f64::INFINITY));
                    cell_sizes.set(cell, size);
                    size
                }
            };
            tallest = tallest.max(size.height);
        }

        let height = entry.height.unwrap_or(tallest);
        row_heights.push(height);

        let slot = height + separator_height;
        if entry.is_header() {
            header_height += slot;
        } else if entry.is_footer() {
            footer_height += slot;
        } else {
            body_height += slot;
        }
    }

    let table_width = constraints.min_width.max(resolved.widths.iter().sum());
    let table_height = header_height + body_height + footer_height;
    let table_size = constraints.constrain(Size::new(table_width, table_height));

    MeasuredTable {
        column_widths: resolved.widths,
        row_heights,
        table_size,
        header_height,
        footer_height,
        body_height,
        separator_height,
        cell_sizes,
    }
}

#[cfg(test)]
mod tests {
    use super::measure_table;
    use crate::measurable::CellMeasurer;
    use crate::{CellRef, ColumnWidth, Constraints, TableBuilder, TableColumn};
    use alloc::vec::Vec;
    use kurbo::Size;

    struct GridCells {
        columns: usize,
        natural: Vec<Size>,
    }

    impl CellMeasurer for GridCells {
        fn measure(&mut self, cell: CellRef, constraints: Constraints) -> Size {
            let natural = self.natural[cell.row * self.columns + cell.column];
            Size::new(natural.width.min(constraints.max_width), natural.height)
        }

        fn min_intrinsic_width(&mut self, cell: CellRef, _height: f64) -> f64 {
            self.natural[cell.row * self.columns + cell.column].width
        }

        fn max_intrinsic_width(&mut self, cell: CellRef, _height: f64) -> f64 {
            self.natural[cell.row * self.columns + cell.column].width
        }
    }

    fn two_fixed_columns() -> [TableColumn; 2] {
        [
            TableColumn::new(ColumnWidth::Fixed(100.0)),
            TableColumn::new(ColumnWidth::Fixed(100.0)),
        ]
    }

    #[test]
    fn row_height_is_the_tallest_cell() {
        let columns = two_fixed_columns();
        let mut builder = TableBuilder::new(2);
        builder
            .row(|r| {
                r.cell();
                r.cell();
            })
            .unwrap();
        let content = builder.finish();
        let mut measurer = GridCells {
            columns: 2,
            natural: alloc::vec![Size::new(60.0, 20.0), Size::new(60.0, 35.0)],
        };

        let measured = measure_table(
            &columns,
            &content,
            &Constraints::UNBOUNDED,
            &mut measurer,
            0.0,
        );
        assert_eq!(measured.row_heights, alloc::vec![35.0]);
        assert_eq!(measured.body_height, 35.0);
        assert_eq!(measured.table_size, Size::new(200.0, 35.0));
    }

    #[test]
    fn fixed_row_height_overrides_the_measurement() {
        let columns = two_fixed_columns();
        let mut builder = TableBuilder::new(2);
        builder
            .row(|r| {
                r.fixed_height(24.0);
                r.cell();
                r.cell();
            })
            .unwrap();
        let content = builder.finish();
        let mut measurer = GridCells {
            columns: 2,
            natural: alloc::vec![Size::new(60.0, 50.0), Size::new(60.0, 50.0)],
        };

        let measured = measure_table(
            &columns,
            &content,
            &Constraints::UNBOUNDED,
            &mut measurer,
            0.0,
        );
        // Taller cells overflow the fixed row rather than growing it.
        assert_eq!(measured.row_heights, alloc::vec![24.0]);
        assert_eq!(measured.cell_size(CellRef::new(0, 0)), Some(Size::new(60.0, 50.0)));
    }

    #[test]
    fn pinned_rows_are_kept_out_of_the_body_extent() {
        let columns = two_fixed_columns();
        let mut builder = TableBuilder::new(2);
        builder
            .header_row(|r| {
                r.fixed_height(30.0);
                r.cell();
                r.cell();
            })
            .unwrap();
        builder
            .rows(3, |r, _| {
                r.fixed_height(20.0);
                r.cell();
                r.cell();
            })
            .unwrap();
        builder
            .footer_row(|r| {
                r.fixed_height(25.0);
                r.cell();
                r.cell();
            })
            .unwrap();
        let content = builder.finish();
        let mut measurer = GridCells {
            columns: 2,
            natural: alloc::vec![Size::new(10.0, 10.0); 10],
        };

        let measured = measure_table(
            &columns,
            &content,
            &Constraints::UNBOUNDED,
            &mut measurer,
            2.0,
        );
        assert_eq!(measured.header_height, 32.0);
        assert_eq!(measured.footer_height, 27.0);
        assert_eq!(measured.body_height, 66.0);
        assert_eq!(measured.slot_height(1), 22.0);

        let (total, window) = measured.scroll_extents(100.0);
        assert_eq!(total, 66.0);
        assert_eq!(window, 100.0 - 32.0 - 27.0);
        // A viewport smaller than the pinned chrome leaves no window.
        assert_eq!(measured.scroll_extents(40.0).1, 0.0);
    }

    #[test]
    fn reported_size_is_clamped_into_the_constraints() {
        let columns = two_fixed_columns();
        let mut builder = TableBuilder::new(2);
        builder
            .rows(5, |r, _| {
                r.fixed_height(40.0);
                r.cell();
                r.cell();
            })
            .unwrap();
        let content = builder.finish();
        let mut measurer = GridCells {
            columns: 2,
            natural: alloc::vec![Size::new(10.0, 10.0); 10],
        };

        let constraints = Constraints::new(250.0, 400.0, 0.0, 120.0);
        let measured = measure_table(&columns, &content, &constraints, &mut measurer, 0.0);
        // Width is pushed up to the minimum; height is clipped to the
        // maximum even though the body extends past it.
        assert_eq!(measured.table_size, Size::new(250.0, 120.0));
        assert_eq!(measured.body_height, 200.0);
    }
}
