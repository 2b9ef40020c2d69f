// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The measurement seam between the layout core and the host UI framework.

use alloc::vec::Vec;
use kurbo::Size;

use crate::{CellRef, Constraints};

/// Measurement queries the host layout system answers for each cell.
///
/// This is the inbound boundary of the layout core: implementations wrap
/// whatever "measure child with constraints" capability the host exposes.
/// Width policies use only these three queries, decoupled from the actual
/// placed child.
pub trait CellMeasurer {
    /// Measures the cell under `constraints` and returns its size.
    fn measure(&mut self, cell: CellRef, constraints: Constraints) -> Size;

    /// Minimum intrinsic width of the cell at the given `height`.
    ///
    /// `height` may be [`f64::INFINITY`] to ask for the unconstrained value.
    fn min_intrinsic_width(&mut self, cell: CellRef, height: f64) -> f64;

    /// Maximum intrinsic width of the cell at the given `height`.
    ///
    /// `height` may be [`f64::INFINITY`] to ask for the unconstrained value.
    fn max_intrinsic_width(&mut self, cell: CellRef, height: f64) -> f64;
}

/// Dense row-major cache of measured cell sizes.
///
/// Width resolution measures some cells with unconstrained width as a side
/// effect; the results are cached here and reused by the second measurement
/// pass so no cell is measured twice in one layout pass.
#[derive(Clone, Debug)]
pub struct CellSizes {
    columns: usize,
    sizes: Vec<Option<Size>>,
}

impl CellSizes {
    /// Creates an empty cache for a table with `columns` columns.
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            sizes: Vec::new(),
        }
    }

    /// Ensures storage for `rows` rows. New slots start unmeasured.
    pub fn ensure_rows(&mut self, rows: usize) {
        let want = rows.saturating_mul(self.columns);
        if self.sizes.len() < want {
            self.sizes.resize(want, None);
        }
    }

    /// Returns the cached size for `cell`, if it has been measured.
    #[must_use]
    pub fn get(&self, cell: CellRef) -> Option<Size> {
        if cell.column >= self.columns {
            return None;
        }
        self.sizes
            .get(cell.row * self.columns + cell.column)
            .copied()
            .flatten()
    }

    /// Records the measured size for `cell`.
    pub fn set(&mut self, cell: CellRef, size: Size) {
        debug_assert!(
            cell.column < self.columns,
            "cell column {} out of bounds for {} columns",
            cell.column,
            self.columns
        );
        self.ensure_rows(cell.row + 1);
        self.sizes[cell.row * self.columns + cell.column] = Some(size);
    }

    /// Returns the cached size for `cell`, measuring it with unconstrained
    /// width first if needed.
    pub(crate) fn measure_preferred<M: CellMeasurer>(
        &mut self,
        measurer: &mut M,
        cell: CellRef,
    ) -> Size {
        if let Some(size) = self.get(cell) {
            return size;
        }
        let size = measurer.measure(cell, Constraints::UNBOUNDED);
        self.set(cell, size);
        size
    }
}
