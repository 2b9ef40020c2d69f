// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A windowing wrapper over table declaration: counts every body row, but
//! realizes only the ones on the current page.

use trellis_table::{DeclarationError, RowBuilder, TableBuilder};

use crate::PageWindow;

/// Declares one page of a table.
///
/// Wraps a [`TableBuilder`] and forwards only the body rows whose ordinal
/// falls inside the page window; the closures of all other body rows are
/// never invoked, so off-page cell content costs nothing to skip. Every
/// body row is counted either way, and the total feeds back into
/// [`PageState::set_count`](crate::PageState::set_count) after the pass.
/// Header and footer rows pass through unsliced and uncounted; they appear
/// on every page.
#[derive(Debug)]
pub struct PagedTableBuilder<'a> {
    inner: &'a mut TableBuilder,
    window: PageWindow,
    declared: usize,
}

impl<'a> PagedTableBuilder<'a> {
    /// Wraps `inner`, realizing only body rows inside `window`.
    pub fn new(inner: &'a mut TableBuilder, window: PageWindow) -> Self {
        Self {
            inner,
            window,
            declared: 0,
        }
    }

    /// Declares one body row; it is realized only if it is on the page.
    pub fn row(&mut self, f: impl FnOnce(&mut RowBuilder)) -> Result<(), DeclarationError> {
        let ordinal = self.declared;
        self.declared += 1;
        if self.window.contains(ordinal) {
            self.inner.row(f)
        } else {
            Ok(())
        }
    }

    /// Declares `count` body rows, invoking the closure only for the ones
    /// on the page. The closure receives the overall body ordinal.
    pub fn rows(
        &mut self,
        count: usize,
        mut f: impl FnMut(&mut RowBuilder, usize),
    ) -> Result<(), DeclarationError> {
        for i in 0..count {
            let ordinal = self.declared;
            self.declared += 1;
            if self.window.contains(ordinal) {
                self.inner.row(|r| f(r, i))?;
            }
        }
        Ok(())
    }

    /// Declares a header row. Headers appear on every page.
    pub fn header_row(&mut self, f: impl FnOnce(&mut RowBuilder)) -> Result<(), DeclarationError> {
        self.inner.header_row(f)
    }

    /// Declares a footer row. Footers appear on every page.
    pub fn footer_row(&mut self, f: impl FnOnce(&mut RowBuilder)) -> Result<(), DeclarationError> {
        self.inner.footer_row(f)
    }

    /// Total body rows declared so far, on and off the page.
    #[must_use]
    pub fn total_declared(&self) -> usize {
        self.declared
    }
}
