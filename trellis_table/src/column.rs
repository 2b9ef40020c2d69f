// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column definitions, width policies, and sort bookkeeping.

use alloc::boxed::Box;

use crate::measurable::CellMeasurer;
use crate::util::round_half_up;
use crate::width::ColumnCells;
use crate::CellAlignment;

/// Width policy of a table column.
///
/// Every variant except [`ColumnWidth::Flex`] is *inflexible*: it yields a
/// concrete preferred width before any remaining space is distributed. Flex
/// columns start from their base width (the widest cell's minimum intrinsic
/// width under infinite constraints) and only ever grow from there.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnWidth {
    /// A constant width.
    Fixed(f64),
    /// A fraction of the container's maximum width, or 0 when the container
    /// width is unbounded.
    Fraction(f64),
    /// The widest cell's natural (unconstrained-measure) width.
    ///
    /// Cells in the column are measured with unbounded width to find this,
    /// which keeps them from stretching to fill available space. For a
    /// wrap-to-content behavior without unconstrained measurement, use
    /// [`ColumnWidth::MinIntrinsic`] or [`ColumnWidth::MaxIntrinsic`].
    Wrap,
    /// The largest of the cells' minimum intrinsic widths.
    MinIntrinsic,
    /// The largest of the cells' maximum intrinsic widths.
    MaxIntrinsic,
    /// A proportional share of the space remaining after all columns'
    /// preferred widths are accounted for, added on top of the column's base
    /// width. The share is `weight / Σ weights` over all flex columns.
    Flex(f64),
    /// The pointwise minimum of two inflexible policies.
    Min(Box<ColumnWidth>, Box<ColumnWidth>),
    /// The pointwise maximum of two inflexible policies.
    Max(Box<ColumnWidth>, Box<ColumnWidth>),
}

impl ColumnWidth {
    /// Combines two inflexible policies, taking the smaller result.
    #[must_use]
    pub fn min(a: Self, b: Self) -> Self {
        debug_assert!(
            a.flex_weight() == 0.0 && b.flex_weight() == 0.0,
            "Min combinator operands must be inflexible"
        );
        Self::Min(Box::new(a), Box::new(b))
    }

    /// Combines two inflexible policies, taking the larger result.
    #[must_use]
    pub fn max(a: Self, b: Self) -> Self {
        debug_assert!(
            a.flex_weight() == 0.0 && b.flex_weight() == 0.0,
            "Max combinator operands must be inflexible"
        );
        Self::Max(Box::new(a), Box::new(b))
    }

    /// The column's share of remaining space: nonzero only for flex columns.
    #[must_use]
    pub fn flex_weight(&self) -> f64 {
        match self {
            Self::Flex(weight) => weight.max(0.0),
            _ => 0.0,
        }
    }

    /// The ideal width of the column before flex distribution.
    ///
    /// The column may end up wider than this if it is flexible.
    pub(crate) fn preferred_width<M: CellMeasurer>(
        &self,
        cells: &mut ColumnCells<'_, M>,
        container_width: f64,
    ) -> f64 {
        match self {
            Self::Fixed(width) => *width,
            Self::Fraction(fraction) => {
                if container_width.is_finite() {
                    round_half_up(fraction * container_width)
                } else {
                    0.0
                }
            }
            Self::Wrap => cells.fold_preferred(),
            // A flex column's base width is its minimum intrinsic width
            // under infinite constraints; it only grows from there.
            Self::MinIntrinsic | Self::Flex(_) => cells.fold_min_intrinsic_at(f64::INFINITY),
            Self::MaxIntrinsic => cells.fold_max_intrinsic_at(f64::INFINITY),
            Self::Min(a, b) => a
                .preferred_width(cells, container_width)
                .min(b.preferred_width(cells, container_width)),
            Self::Max(a, b) => a
                .preferred_width(cells, container_width)
                .max(b.preferred_width(cells, container_width)),
        }
    }

    /// The smallest width at which the column's cells can still lay out,
    /// probing each cell at its row's declared height.
    pub(crate) fn min_intrinsic_width<M: CellMeasurer>(
        &self,
        cells: &mut ColumnCells<'_, M>,
        container_width: f64,
    ) -> f64 {
        match self {
            Self::Fixed(width) => *width,
            Self::Fraction(fraction) => {
                if container_width.is_finite() {
                    round_half_up(fraction * container_width)
                } else {
                    0.0
                }
            }
            Self::Wrap | Self::MinIntrinsic | Self::MaxIntrinsic | Self::Flex(_) => {
                cells.fold_min_intrinsic_probed()
            }
            Self::Min(a, b) => a
                .min_intrinsic_width(cells, container_width)
                .min(b.min_intrinsic_width(cells, container_width)),
            Self::Max(a, b) => a
                .min_intrinsic_width(cells, container_width)
                .max(b.min_intrinsic_width(cells, container_width)),
        }
    }

    /// The largest useful width of the column's cells, probing each cell at
    /// its row's declared height.
    pub(crate) fn max_intrinsic_width<M: CellMeasurer>(
        &self,
        cells: &mut ColumnCells<'_, M>,
        container_width: f64,
    ) -> f64 {
        match self {
            Self::Fixed(width) => *width,
            Self::Fraction(fraction) => {
                if container_width.is_finite() {
                    round_half_up(fraction * container_width)
                } else {
                    0.0
                }
            }
            Self::Wrap | Self::MinIntrinsic | Self::MaxIntrinsic | Self::Flex(_) => {
                cells.fold_max_intrinsic_probed()
            }
            Self::Min(a, b) => a
                .max_intrinsic_width(cells, container_width)
                .min(b.max_intrinsic_width(cells, container_width)),
            Self::Max(a, b) => a
                .max_intrinsic_width(cells, container_width)
                .max(b.max_intrinsic_width(cells, container_width)),
        }
    }
}

/// Definition of one table column.
///
/// Owned by the table's caller and immutable per layout pass; column order
/// is significant and fixed for the table's lifetime.
#[derive(Clone, Debug)]
pub struct TableColumn {
    /// Alignment of cells within this column's slots.
    pub alignment: CellAlignment,
    /// Width policy for this column.
    pub width: ColumnWidth,
    /// Whether header clicks on this column should drive sorting.
    pub sortable: bool,
}

impl TableColumn {
    /// Creates a column with the given width policy and default alignment.
    #[must_use]
    pub fn new(width: ColumnWidth) -> Self {
        Self {
            alignment: CellAlignment::START_CENTER,
            width,
            sortable: false,
        }
    }

    /// Sets the alignment of cells in this column.
    #[must_use]
    pub fn with_alignment(mut self, alignment: CellAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Marks this column as sortable.
    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Current sort selection across a table's columns.
///
/// The core only tracks the selection; hosts observe it and reorder their
/// data accordingly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    /// The column currently sorted by, if any.
    pub column: Option<usize>,
    /// Sort direction for the selected column.
    pub ascending: bool,
}

impl SortState {
    /// Creates an unsorted state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a header click on `column`: clicking the sorted column flips
    /// its direction, clicking any other column selects it ascending.
    pub fn toggle(&mut self, column: usize) {
        if self.column == Some(column) {
            self.ascending = !self.ascending;
        } else {
            self.column = Some(column);
            self.ascending = true;
        }
    }

    /// Returns the direction for `column`, or `None` if it is not sorted.
    #[must_use]
    pub fn direction_for(&self, column: usize) -> Option<bool> {
        (self.column == Some(column)).then_some(self.ascending)
    }
}
