// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A paginated sales report laid out with the table crates.
//!
//! This example shows how the pieces compose outside any UI framework:
//! - `trellis_paging` slices a 23 row dataset into pages of 5,
//! - `trellis_table` measures and places one page with a monospace text
//!   measurer,
//! - `trellis_scroll` drives the body offset of a taller, unpaginated view.
//!
//! Run:
//! - `cargo run -p trellis_demos --example paginated_report`

use kurbo::Size;
use trellis_paging::{PageState, PagedTableBuilder};
use trellis_scroll::{ScrollController, ScrollRequest};
use trellis_table::{
    CellAlignment, CellMeasurer, CellRef, ColumnWidth, Constraints, DeclarationError,
    LayoutDirection, TableBuilder, TableColumn, measure_table, place_table,
};

const CHAR_WIDTH: f64 = 8.0;
const LINE_HEIGHT: f64 = 16.0;

/// Measures cells as monospace text: width follows the character count.
struct TextMeasurer {
    rows: Vec<[String; 3]>,
}

impl TextMeasurer {
    fn text(&self, cell: CellRef) -> &str {
        &self.rows[cell.row][cell.column]
    }
}

impl CellMeasurer for TextMeasurer {
    fn measure(&mut self, cell: CellRef, constraints: Constraints) -> Size {
        let width = self.text(cell).len() as f64 * CHAR_WIDTH;
        Size::new(width.min(constraints.max_width), LINE_HEIGHT)
    }

    fn min_intrinsic_width(&mut self, cell: CellRef, _height: f64) -> f64 {
        self.text(cell).len() as f64 * CHAR_WIDTH
    }

    fn max_intrinsic_width(&mut self, cell: CellRef, _height: f64) -> f64 {
        self.text(cell).len() as f64 * CHAR_WIDTH
    }
}

fn dataset() -> Vec<[String; 3]> {
    (1..=23)
        .map(|i| {
            [
                format!("Item {i}"),
                format!("{}", i * 3),
                format!("{}.00", i * 10),
            ]
        })
        .collect()
}

fn main() -> Result<(), DeclarationError> {
    let columns = [
        TableColumn::new(ColumnWidth::Wrap),
        TableColumn::new(ColumnWidth::Flex(1.0)).with_alignment(CellAlignment::CENTER),
        TableColumn::new(ColumnWidth::Fixed(80.0)).with_alignment(CellAlignment::END_CENTER),
    ];
    let data = dataset();

    // Page through the dataset 5 rows at a time.
    let mut page_state = PageState::new(5).expect("page size is nonzero");
    page_state.set_count(data.len());

    for page in 0..page_state.page_count() {
        // Realize only the rows of this page, headers included on each.
        let mut builder = TableBuilder::new(3);
        let mut paged = PagedTableBuilder::new(&mut builder, page_state.window());
        let mut realized = vec![[
            "Product".to_string(),
            "Qty".to_string(),
            "Price".to_string(),
        ]];
        paged.header_row(|r| {
            r.fixed_height(24.0);
            r.cell();
            r.cell();
            r.cell();
        })?;
        paged.rows(data.len(), |r, i| {
            realized.push(data[i].clone());
            r.key(i as u64);
            r.cell();
            r.cell();
            r.cell();
        })?;
        page_state.set_count(paged.total_declared());
        let content = builder.finish();

        let mut measurer = TextMeasurer {
            rows: realized,
        };
        let constraints = Constraints::new(0.0, 360.0, 0.0, f64::INFINITY);
        let measured = measure_table(&columns, &content, &constraints, &mut measurer, 1.0);
        let placement = place_table(
            &columns,
            &content,
            &measured,
            f64::INFINITY,
            0.0,
            LayoutDirection::Ltr,
        );

        println!(
            "page {}/{} ({} rows, table {} x {})",
            page + 1,
            page_state.page_count(),
            page_state.window().len(),
            measured.table_size.width,
            measured.table_size.height,
        );
        for placed in &placement.rows {
            let texts: Vec<&str> = placed
                .cells
                .iter()
                .map(|cell| measurer.text(cell.cell))
                .collect();
            println!(
                "  y {:>6.1}  h {:>4.1}  {:?}",
                placed.origin.y, placed.size.height, texts
            );
        }
        page_state.next_page();
    }

    // The same content can scroll instead of paginate: feed the measured
    // extents to a scroll controller and move the viewport.
    let mut builder = TableBuilder::new(3);
    let mut realized = vec![[
        "Product".to_string(),
        "Qty".to_string(),
        "Price".to_string(),
    ]];
    builder.header_row(|r| {
        r.fixed_height(24.0);
        r.cell();
        r.cell();
        r.cell();
    })?;
    builder.rows(data.len(), |r, i| {
        realized.push(data[i].clone());
        r.cell();
        r.cell();
        r.cell();
    })?;
    let content = builder.finish();
    let mut measurer = TextMeasurer {
        rows: realized,
    };
    let constraints = Constraints::new(0.0, 360.0, 0.0, f64::INFINITY);
    let measured = measure_table(&columns, &content, &constraints, &mut measurer, 1.0);

    let viewport_height = 120.0;
    let mut scroll = ScrollController::new();
    let (total, window) = measured.scroll_extents(viewport_height);
    scroll.notify_layout(total, window);
    scroll.submit(ScrollRequest::By(-1000.0));

    let placement = place_table(
        &columns,
        &content,
        &measured,
        viewport_height,
        scroll.offset(),
        LayoutDirection::Ltr,
    );
    println!(
        "\nscrolled view at offset {} of {}: {} rows visible",
        scroll.offset(),
        scroll.state().max_offset(),
        placement.rows.len(),
    );
    for placed in &placement.rows {
        println!("  y {:>6.1}  row {}", placed.origin.y, placed.row);
    }
    Ok(())
}
