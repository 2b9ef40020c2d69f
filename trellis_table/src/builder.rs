// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declaration of table content: an explicit builder collecting rows and
//! cells into flat, index-addressed storage before measurement begins.

use alloc::vec::Vec;
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::{DeclarationError, Rgba, RowFlags};

/// One declared row: flags, optional fixed height, background, and keys.
///
/// Cell content stays host-owned; the entry only records how many cells the
/// row declared (always equal to the column count once validated) and any
/// per-cell identity keys.
#[derive(Clone, Debug)]
pub struct RowEntry {
    /// Pinning and interaction flags.
    pub flags: RowFlags,
    /// Explicit fixed height. When set it overrides the measured maximum;
    /// taller cell content overflows and is clipped by the host.
    pub height: Option<f64>,
    /// Background color for the host to paint, if any.
    pub background: Option<Rgba>,
    /// Stable identity key for diffing rows across layout passes.
    pub key: Option<u64>,
    /// Per-cell identity keys, one slot per column.
    pub cell_keys: SmallVec<[Option<u64>; 8]>,
}

impl RowEntry {
    /// Returns `true` if the row is pinned to the top of the viewport.
    #[must_use]
    pub fn is_header(&self) -> bool {
        self.flags.contains(RowFlags::HEADER)
    }

    /// Returns `true` if the row is pinned to the bottom of the viewport.
    #[must_use]
    pub fn is_footer(&self) -> bool {
        self.flags.contains(RowFlags::FOOTER)
    }
}

/// Fully declared table content: an ordered list of validated rows.
///
/// Produced by [`TableBuilder::finish`] and consumed by the measurement and
/// placement passes. Immutable per layout pass.
#[derive(Clone, Debug)]
pub struct TableContent {
    column_count: usize,
    rows: Vec<RowEntry>,
    rows_by_key: HashMap<u64, usize>,
}

impl TableContent {
    /// Number of columns every row declares cells for.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// The declared rows, in declaration order.
    #[must_use]
    pub fn rows(&self) -> &[RowEntry] {
        &self.rows
    }

    /// Returns `true` if no rows were declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up the current index of the row declared with `key`.
    ///
    /// This is the diffing hook for hosts that keep per-row state across
    /// layout passes: indices shift as rows come and go, keys do not.
    #[must_use]
    pub fn row_index_of_key(&self, key: u64) -> Option<usize> {
        self.rows_by_key.get(&key).copied()
    }
}

/// Collects row declarations for one layout pass.
///
/// The builder is handed by mutable reference into host configuration code:
///
/// ```
/// use trellis_table::TableBuilder;
///
/// let mut builder = TableBuilder::new(2);
/// builder.header_row(|r| {
///     r.cell();
///     r.cell();
/// })?;
/// builder.row(|r| {
///     r.key(7).cell();
///     r.cell();
/// })?;
/// let content = builder.finish();
/// assert_eq!(content.rows().len(), 2);
/// assert_eq!(content.row_index_of_key(7), Some(1));
/// # Ok::<(), trellis_table::DeclarationError>(())
/// ```
#[derive(Clone, Debug)]
pub struct TableBuilder {
    column_count: usize,
    rows: Vec<RowEntry>,
    rows_by_key: HashMap<u64, usize>,
}

impl TableBuilder {
    /// Creates a builder for a table with `column_count` columns.
    #[must_use]
    pub fn new(column_count: usize) -> Self {
        Self {
            column_count,
            rows: Vec::new(),
            rows_by_key: HashMap::new(),
        }
    }

    /// Number of columns every row must declare cells for.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Number of rows declared so far.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Declares one body row.
    ///
    /// The closure declares the row's cells and metadata. When it returns,
    /// the declared cell count must equal the column count; a mismatch is a
    /// fatal consistency error reported immediately, naming the row.
    pub fn row(&mut self, f: impl FnOnce(&mut RowBuilder)) -> Result<(), DeclarationError> {
        self.push_row(RowFlags::empty(), f)
    }

    /// Declares a row pinned to the top of the viewport.
    pub fn header_row(&mut self, f: impl FnOnce(&mut RowBuilder)) -> Result<(), DeclarationError> {
        self.push_row(RowFlags::HEADER, f)
    }

    /// Declares a row pinned to the bottom of the viewport.
    pub fn footer_row(&mut self, f: impl FnOnce(&mut RowBuilder)) -> Result<(), DeclarationError> {
        self.push_row(RowFlags::FOOTER, f)
    }

    /// Declares `count` body rows, invoking the closure with each ordinal.
    pub fn rows(
        &mut self,
        count: usize,
        mut f: impl FnMut(&mut RowBuilder, usize),
    ) -> Result<(), DeclarationError> {
        for i in 0..count {
            self.push_row(RowFlags::empty(), |r| f(r, i))?;
        }
        Ok(())
    }

    fn push_row(
        &mut self,
        flags: RowFlags,
        f: impl FnOnce(&mut RowBuilder),
    ) -> Result<(), DeclarationError> {
        let mut row = RowBuilder {
            flags,
            height: None,
            background: None,
            key: None,
            cells: 0,
            cell_keys: SmallVec::new(),
        };
        f(&mut row);

        let index = self.rows.len();
        if row.cells != self.column_count {
            return Err(DeclarationError::CellCountMismatch {
                row: index,
                columns: self.column_count,
                cells: row.cells,
            });
        }
        if let Some(key) = row.key {
            self.rows_by_key.insert(key, index);
        }
        self.rows.push(RowEntry {
            flags: row.flags,
            height: row.height,
            background: row.background,
            key: row.key,
            cell_keys: row.cell_keys,
        });
        Ok(())
    }

    /// Finishes declaration, yielding the immutable content for this pass.
    #[must_use]
    pub fn finish(self) -> TableContent {
        TableContent {
            column_count: self.column_count,
            rows: self.rows,
            rows_by_key: self.rows_by_key,
        }
    }
}

/// Declares the cells and metadata of a single row.
#[derive(Debug)]
pub struct RowBuilder {
    flags: RowFlags,
    height: Option<f64>,
    background: Option<Rgba>,
    key: Option<u64>,
    cells: usize,
    cell_keys: SmallVec<[Option<u64>; 8]>,
}

impl RowBuilder {
    /// Declares the next cell in this row.
    pub fn cell(&mut self) -> &mut Self {
        self.cells += 1;
        self.cell_keys.push(None);
        self
    }

    /// Declares the next cell with a stable identity key.
    pub fn keyed_cell(&mut self, key: u64) -> &mut Self {
        self.cells += 1;
        self.cell_keys.push(Some(key));
        self
    }

    /// Marks the row as clickable. The host wires the actual handler.
    pub fn on_click(&mut self) -> &mut Self {
        self.flags |= RowFlags::CLICKABLE;
        self
    }

    /// Fixes the row height, overriding the measured maximum cell height.
    pub fn fixed_height(&mut self, height: f64) -> &mut Self {
        debug_assert!(
            height.is_finite() && height >= 0.0,
            "fixed row height must be finite and non-negative; got {height}"
        );
        self.height = Some(height);
        self
    }

    /// Sets a background color for the host to paint behind the row.
    pub fn background(&mut self, color: Rgba) -> &mut Self {
        self.background = Some(color);
        self
    }

    /// Attaches a stable identity key for diffing across layout passes.
    pub fn key(&mut self, key: u64) -> &mut Self {
        self.key = Some(key);
        self
    }
}
