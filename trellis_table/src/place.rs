// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row and cell placement: turns measured geometry plus a scroll offset
//! into concrete rectangles for the host to paint.

use alloc::vec::Vec;
use kurbo::{Point, Rect, Size};

use crate::measure::MeasuredTable;
use crate::{CellRef, LayoutDirection, Rgba, RowFlags, TableColumn, TableContent};

/// One cell positioned inside the table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedCell {
    /// Which cell this is.
    pub cell: CellRef,
    /// Top-left corner, in table coordinates.
    pub origin: Point,
    /// The cell's measured size. May exceed its slot; hosts clip overflow.
    pub size: Size,
}

/// One visible row with its placed cells.
#[derive(Clone, Debug)]
pub struct PlacedRow {
    /// Row index, in declaration order.
    pub row: usize,
    /// Top-left corner of the row, in table coordinates.
    pub origin: Point,
    /// The row's extent: full table width by its measured height.
    pub size: Size,
    /// The row's pinning and interaction flags.
    pub flags: RowFlags,
    /// Background color to paint behind the row, if declared.
    pub background: Option<Rgba>,
    /// Separator strip below the row, when separators have height.
    pub separator: Option<Rect>,
    /// The row's cells, in column order.
    pub cells: Vec<PlacedCell>,
}

impl PlacedRow {
    /// The row's bounding rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// Placement output for one layout pass.
///
/// Rows appear in paint order: visible body rows first, then pinned header
/// and footer rows, so pinned rows paint over body rows scrolling beneath
/// them.
#[derive(Clone, Debug)]
pub struct TablePlacement {
    /// The placed rows, in paint order.
    pub rows: Vec<PlacedRow>,
    /// The viewport height placement was computed against.
    pub viewport_height: f64,
}

impl TablePlacement {
    /// Looks up the placed row with declaration index `row`, if visible.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&PlacedRow> {
        self.rows.iter().find(|placed| placed.row == row)
    }
}

/// Places the table's rows for a viewport and scroll position.
///
/// Header rows stack from the top of the viewport and footer rows from its
/// bottom, both in declaration order. Body rows flow below the header block,
/// shifted up by `scroll_offset`; rows entirely outside the viewport are
/// culled and produce nothing. An unbounded `viewport_height` places every
/// row at the table's own height.
#[must_use]
pub fn place_table(
    columns: &[TableColumn],
    content: &TableContent,
    measured: &MeasuredTable,
    viewport_height: f64,
    scroll_offset: f64,
    direction: LayoutDirection,
) -> TablePlacement {
    debug_assert!(
        scroll_offset >= 0.0,
        "scroll offset must be non-negative; got {scroll_offset}"
    );

    let column_total: f64 = measured.column_widths.iter().sum();
    let table_width = measured.table_size.width.max(column_total);
    let viewport = if viewport_height.is_finite() {
        viewport_height
    } else {
        measured.header_height + measured.body_height + measured.footer_height
    };

    let mut body = Vec::new();
    let mut pinned = Vec::new();

    let mut header_offset = 0.0;
    let mut footer_offset = viewport;
    let mut body_offset = 0.0;

    for (row, entry) in content.rows().iter().enumerate() {
        let height = measured.row_heights[row];
        let slot = measured.slot_height(row);

        let y = if entry.is_header() {
            let y = header_offset;
            header_offset += slot;
            y
        } else if entry.is_footer() {
            footer_offset -= slot;
            footer_offset
        } else {
            let y = body_offset - scroll_offset;
            body_offset += slot;
            // Rows entirely above or below the viewport produce nothing.
            if y <= -slot || y >= viewport {
                continue;
            }
            y + measured.header_height
        };

        let mut cells = Vec::with_capacity(columns.len());
        let mut x_cursor = 0.0;
        for (column, definition) in columns.iter().enumerate() {
            let width = measured.column_widths[column];
            let slot_x = match direction {
                LayoutDirection::Ltr => x_cursor,
                LayoutDirection::Rtl => table_width - x_cursor - width,
            };
            x_cursor += width;

            let cell = CellRef::new(row, column);
            let size = measured.cell_size(cell).unwrap_or(Size::ZERO);
            let offset = definition
                .alignment
                .align(size, Size::new(width, height), direction);
            cells.push(PlacedCell {
                cell,
                origin: Point::new(slot_x + offset.x, y + offset.y),
                size,
            });
        }

        let separator = (measured.separator_height > 0.0).then(|| {
            Rect::from_origin_size(
                Point::new(0.0, y + height),
                Size::new(table_width, measured.separator_height),
            )
        });
        let placed = PlacedRow {
            row,
            origin: Point::new(0.0, y),
            size: Size::new(table_width, height),
            flags: entry.flags,
            background: entry.background,
            separator,
            cells,
        };
        if entry.is_header() || entry.is_footer() {
            pinned.push(placed);
        } else {
            body.push(placed);
        }
    }

    body.extend(pinned);
    TablePlacement {
        rows: body,
        viewport_height: viewport,
    }
}

#[cfg(test)]
mod tests {
    use super::place_table;
    use crate::measurable::CellMeasurer;
    use crate::measure::measure_table;
    use crate::{
        CellAlignment, CellRef, ColumnWidth, Constraints, LayoutDirection, RowFlags, TableBuilder,
        TableColumn, TableContent,
    };
    use kurbo::{Point, Size};

    struct UniformCells {
        size: Size,
    }

    impl CellMeasurer for UniformCells {
        fn measure(&mut self, _cell: CellRef, _constraints: Constraints) -> Size {
            self.size
        }

        fn min_intrinsic_width(&mut self, _cell: CellRef, _height: f64) -> f64 {
            self.size.width
        }

        fn max_intrinsic_width(&mut self, _cell: CellRef, _height: f64) -> f64 {
            self.size.width
        }
    }

    fn pinned_table(body_rows: usize) -> TableContent {
        let mut builder = TableBuilder::new(2);
        builder
            .header_row(|r| {
                r.fixed_height(30.0);
                r.cell();
                r.cell();
            })
            .unwrap();
        builder
            .rows(body_rows, |r, _| {
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
        builder.finish()
    }

    fn columns() -> [TableColumn; 2] {
        [
            TableColumn::new(ColumnWidth::Fixed(100.0)).with_alignment(CellAlignment::START_TOP),
            TableColumn::new(ColumnWidth::Fixed(50.0)).with_alignment(CellAlignment::START_TOP),
        ]
    }

    #[test]
    fn header_footer_and_body_offsets() {
        let columns = columns();
        let content = pinned_table(3);
        let mut measurer = UniformCells {
            size: Size::new(10.0, 10.0),
        };
        let measured = measure_table(
            &columns,
            &content,
            &Constraints::UNBOUNDED,
            &mut measurer,
            0.0,
        );

        let placement = place_table(&columns, &content, &measured, 100.0, 0.0, LayoutDirection::Ltr);

        // Header pinned at the top, footer at the viewport bottom.
        assert_eq!(placement.row(0).unwrap().origin, Point::new(0.0, 0.0));
        assert_eq!(placement.row(4).unwrap().origin, Point::new(0.0, 75.0));
        // Body rows start below the header block.
        assert_eq!(placement.row(1).unwrap().origin.y, 30.0);
        assert_eq!(placement.row(2).unwrap().origin.y, 50.0);

        // Pinned rows are emitted after body rows so they paint on top.
        let order: alloc::vec::Vec<usize> = placement.rows.iter().map(|r| r.row).collect();
        assert_eq!(order, alloc::vec![1, 2, 3, 0, 4]);
    }

    #[test]
    fn scrolling_shifts_and_culls_body_rows() {
        let columns = columns();
        let content = pinned_table(50);
        let mut measurer = UniformCells {
            size: Size::new(10.0, 10.0),
        };
        let measured = measure_table(
            &columns,
            &content,
            &Constraints::UNBOUNDED,
            &mut measurer,
            0.0,
        );

        let placement =
            place_table(&columns, &content, &measured, 100.0, 45.0, LayoutDirection::Ltr);

        // Row 1 sits at body offset 0, fully scrolled past (-45 <= -20).
        assert!(placement.row(1).is_none());
        // Row 3 at body offset 40 is partially visible at -5.
        assert_eq!(placement.row(3).unwrap().origin.y, -5.0 + 30.0);
        // Row 8 at body offset 140 still pokes into the 100 high viewport;
        // row 9 at 160 starts past it and is culled.
        assert!(placement.row(8).is_some());
        assert!(placement.row(9).is_none());
        // Pinned rows stay put regardless of scroll.
        assert_eq!(placement.row(0).unwrap().origin.y, 0.0);
        assert_eq!(placement.row(51).unwrap().origin.y, 75.0);
    }

    #[test]
    fn rtl_reverses_the_column_run() {
        let columns = columns();
        let content = pinned_table(1);
        let mut measurer = UniformCells {
            size: Size::new(10.0, 10.0),
        };
        let measured = measure_table(
            &columns,
            &content,
            &Constraints::UNBOUNDED,
            &mut measurer,
            0.0,
        );

        let ltr = place_table(&columns, &content, &measured, 100.0, 0.0, LayoutDirection::Ltr);
        let rtl = place_table(&columns, &content, &measured, 100.0, 0.0, LayoutDirection::Rtl);

        let ltr_row = ltr.row(1).unwrap();
        assert_eq!(ltr_row.cells[0].origin.x, 0.0);
        assert_eq!(ltr_row.cells[1].origin.x, 100.0);

        // First column occupies the rightmost slot; Start aligns to its
        // right edge.
        let rtl_row = rtl.row(1).unwrap();
        assert_eq!(rtl_row.cells[0].origin.x, 50.0 + (100.0 - 10.0));
        assert_eq!(rtl_row.cells[1].origin.x, 50.0 - 10.0);
    }

    #[test]
    fn unbounded_viewport_shows_the_whole_table() {
        let columns = columns();
        let content = pinned_table(4);
        let mut measurer = UniformCells {
            size: Size::new(10.0, 10.0),
        };
        let measured = measure_table(
            &columns,
            &content,
            &Constraints::UNBOUNDED,
            &mut measurer,
            1.0,
        );

        let placement = place_table(
            &columns,
            &content,
            &measured,
            f64::INFINITY,
            0.0,
            LayoutDirection::Ltr,
        );
        assert_eq!(placement.rows.len(), 6);
        // The footer lands at the bottom of the table's own height.
        let table_height = measured.header_height + measured.body_height + measured.footer_height;
        assert_eq!(placement.viewport_height, table_height);
        assert_eq!(placement.row(5).unwrap().origin.y, table_height - 26.0);
        // Separators carry the full table width.
        let separator = placement.row(1).unwrap().separator.unwrap();
        assert_eq!(separator.width(), 150.0);
        assert_eq!(separator.height(), 1.0);
    }

    #[test]
    fn rows_carry_their_flags_and_width() {
        let columns = columns();
        let content = pinned_table(1);
        let mut measurer = UniformCells {
            size: Size::new(10.0, 10.0),
        };
        let measured = measure_table(
            &columns,
            &content,
            &Constraints::new(200.0, f64::INFINITY, 0.0, f64::INFINITY),
            &mut measurer,
            0.0,
        );

        let placement = place_table(&columns, &content, &measured, 100.0, 0.0, LayoutDirection::Ltr);
        let header = placement.row(0).unwrap();
        assert!(header.flags.contains(RowFlags::HEADER));
        // Rows span the reported table width, not just the column total.
        assert_eq!(header.size, Size::new(200.0, 30.0));
    }
}
