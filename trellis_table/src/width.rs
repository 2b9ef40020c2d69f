// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The column width resolver: the first pass of table layout.

use smallvec::{smallvec, SmallVec};

use crate::builder::{RowEntry, TableContent};
use crate::measurable::{CellMeasurer, CellSizes};
use crate::util::round_half_up;
use crate::{CellRef, Constraints, TableColumn};

/// Per-column view over the table's cells, as seen by width policies.
///
/// Policies query cells only through this adapter; unconstrained measures
/// performed here are cached in [`CellSizes`] and reused by the second pass.
pub(crate) struct ColumnCells<'a, M> {
    measurer: &'a mut M,
    cache: &'a mut CellSizes,
    column: usize,
    rows: &'a [RowEntry],
}

impl<'a, M: CellMeasurer> ColumnCells<'a, M> {
    pub(crate) fn new(
        measurer: &'a mut M,
        cache: &'a mut CellSizes,
        column: usize,
        rows: &'a [RowEntry],
    ) -> Self {
        Self {
            measurer,
            cache,
            column,
            rows,
        }
    }

    fn cell(&self, row: usize) -> CellRef {
        CellRef::new(row, self.column)
    }

    /// Widest natural (unconstrained-measure) cell width in the column.
    pub(crate) fn fold_preferred(&mut self) -> f64 {
        let mut widest: f64 = 0.0;
        for row in 0..self.rows.len() {
            let cell = self.cell(row);
            widest = widest.max(self.cache.measure_preferred(self.measurer, cell).width);
        }
        widest
    }

    /// Largest minimum intrinsic width at a uniform probe `height`.
    pub(crate) fn fold_min_intrinsic_at(&mut self, height: f64) -> f64 {
        let mut widest: f64 = 0.0;
        for row in 0..self.rows.len() {
            let cell = self.cell(row);
            widest = widest.max(self.measurer.min_intrinsic_width(cell, height));
        }
        widest
    }

    /// Largest maximum intrinsic width at a uniform probe `height`.
    pub(crate) fn fold_max_intrinsic_at(&mut self, height: f64) -> f64 {
        let mut widest: f64 = 0.0;
        for row in 0..self.rows.len() {
            let cell = self.cell(row);
            widest = widest.max(self.measurer.max_intrinsic_width(cell, height));
        }
        widest
    }

    /// Largest minimum intrinsic width, probing each cell at its own row's
    /// declared height (unbounded when the row height is automatic).
    pub(crate) fn fold_min_intrinsic_probed(&mut self) -> f64 {
        let mut widest: f64 = 0.0;
        for (row, entry) in self.rows.iter().enumerate() {
            let cell = self.cell(row);
            let height = entry.height.unwrap_or(f64::INFINITY);
            widest = widest.max(self.measurer.min_intrinsic_width(cell, height));
        }
        widest
    }

    /// Largest maximum intrinsic width, probing each cell at its own row's
    /// declared height (unbounded when the row height is automatic).
    pub(crate) fn fold_max_intrinsic_probed(&mut self) -> f64 {
        let mut widest: f64 = 0.0;
        for (row, entry) in self.rows.iter().enumerate() {
            let cell = self.cell(row);
            let height = entry.height.unwrap_or(f64::INFINITY);
            widest = widest.max(self.measurer.max_intrinsic_width(cell, height));
        }
        widest
    }
}

/// Result of column width resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedColumns {
    /// Final width of each column, in column order.
    pub widths: SmallVec<[f64; 8]>,
    /// Sum of per-column minimum intrinsic widths; the fallback measure of
    /// available space when the container width is unbounded.
    pub min_table_width: f64,
    /// Sum of per-column maximum intrinsic widths; what hosts report when
    /// their own layout system asks for the table's maximum intrinsic
    /// width.
    pub max_table_width: f64,
}

impl ResolvedColumns {
    /// Sum of all column widths.
    #[must_use]
    pub fn total_width(&self) -> f64 {
        self.widths.iter().sum()
    }
}

/// Resolves every column's final width for one layout pass.
///
/// Inflexible policies contribute their preferred width directly; flex
/// columns start from their base width and then split any remaining space
/// proportionally to their weights, each grant rounded half-up. With an
/// unbounded container width the available space falls back to
/// `max(min_width, Σ column min intrinsic widths)` so that flex columns size
/// from content instead of growing without bound.
///
/// Unconstrained cell measures performed here are cached in `cache` for the
/// second pass. The result also carries the min and max intrinsic width
/// sums over all columns, for hosts answering their layout system's
/// intrinsic width queries. Zero columns yield an empty result; zero rows
/// resolve from the policies' content-free terms.
pub fn resolve_column_widths<M: CellMeasurer>(
    columns: &[TableColumn],
    content: &TableContent,
    constraints: &Constraints,
    measurer: &mut M,
    cache: &mut CellSizes,
) -> ResolvedColumns {
    debug_assert_eq!(
        columns.len(),
        content.column_count(),
        "column definitions and declared content disagree on column count"
    );
    cache.ensure_rows(content.rows().len());

    let mut widths: SmallVec<[f64; 8]> = smallvec![0.0; columns.len()];
    let mut min_table_width = 0.0;
    let mut max_table_width = 0.0;
    let mut needed_width = 0.0;
    let mut total_flex = 0.0;

    for (index, column) in columns.iter().enumerate() {
        let mut cells = ColumnCells::new(measurer, cache, index, content.rows());
        min_table_width += column
            .width
            .min_intrinsic_width(&mut cells, constraints.max_width);
        max_table_width += column
            .width
            .max_intrinsic_width(&mut cells, constraints.max_width);
        let preferred = column
            .width
            .preferred_width(&mut cells, constraints.max_width);
        debug_assert!(
            preferred.is_finite() && preferred >= 0.0,
            "column {index} resolved a non-finite or negative preferred width: {preferred}"
        );
        widths[index] = preferred;
        needed_width += preferred;
        total_flex += column.width.flex_weight();
    }

    let available_space = if constraints.max_width.is_finite() {
        constraints.max_width
    } else {
        constraints.min_width.max(min_table_width)
    };
    let remaining_space = available_space - needed_width;

    // Grow flexible columns to fill the remaining horizontal space.
    if total_flex > 0.0 && remaining_space > 0.0 {
        for (index, column) in columns.iter().enumerate() {
            let weight = column.width.flex_weight();
            if weight > 0.0 {
                widths[index] += round_half_up(remaining_space * (weight / total_flex));
            }
        }
    }

    ResolvedColumns {
        widths,
        min_table_width,
        max_table_width,
    }
}
