// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page position over a row count.

use crate::{PageWindow, PagingError};

/// Which page of a table's body rows is showing.
///
/// The state tracks the page size, the current page index, and the total
/// body row count as of the last declaration pass. Navigation never fails;
/// it clamps to the pages that exist. An index past the end (after the
/// count shrank) windows rows that no longer get declared, so the page
/// shows nothing until navigation brings it back in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    page_index: usize,
    page_size: usize,
    count: usize,
}

impl PageState {
    /// Creates a state on the first page with no rows counted yet.
    ///
    /// # Errors
    ///
    /// Returns [`PagingError::ZeroPageSize`] if `page_size` is zero.
    pub fn new(page_size: usize) -> Result<Self, PagingError> {
        if page_size == 0 {
            return Err(PagingError::ZeroPageSize);
        }
        Ok(Self {
            page_index: 0,
            page_size,
            count: 0,
        })
    }

    /// Restores a state from [`to_parts`](Self::to_parts) output.
    ///
    /// # Errors
    ///
    /// Returns [`PagingError::ZeroPageSize`] if the stored page size is zero.
    pub fn from_parts(parts: [usize; 3]) -> Result<Self, PagingError> {
        let [page_size, page_index, count] = parts;
        if page_size == 0 {
            return Err(PagingError::ZeroPageSize);
        }
        Ok(Self {
            page_index,
            page_size,
            count,
        })
    }

    /// The persistable parts of this state: page size, page index, count.
    #[must_use]
    pub fn to_parts(&self) -> [usize; 3] {
        [self.page_size, self.page_index, self.count]
    }

    /// Current page index, counted from zero.
    #[must_use]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Maximum number of rows per page. Always at least 1.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total body row count, as of the last declaration pass.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Records the total body row count from a declaration pass.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
    }

    /// Number of pages the current count fills. Zero rows means zero pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.count.div_ceil(self.page_size)
    }

    /// Number of rows on page `index`: the page size, except on the last
    /// page which holds the remainder.
    #[must_use]
    pub fn rows_on_page(&self, index: usize) -> usize {
        self.page_size
            .min(self.count.saturating_sub(index * self.page_size))
    }

    /// The row window of the current page:
    /// `[index × size, index × size + size)`.
    ///
    /// The window is deliberately independent of the count: the count is
    /// discovered by declaring rows through the window, so a fresh state
    /// must already window the first page. Realization is bounded by what
    /// the host actually declares, and a window past the end matches
    /// nothing; [`rows_on_page`](Self::rows_on_page) reports the counted
    /// sizes.
    #[must_use]
    pub fn window(&self) -> PageWindow {
        let from = self.page_index * self.page_size;
        PageWindow::new(from, from + self.page_size)
    }

    /// Moves to the next page, if one exists.
    pub fn next_page(&mut self) {
        let last = self.page_count().saturating_sub(1);
        self.page_index = (self.page_index + 1).min(last);
    }

    /// Moves to the previous page, if one exists.
    pub fn prev_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    /// Moves to the first page.
    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    /// Moves to the last page that currently exists.
    pub fn last_page(&mut self) {
        self.page_index = self.page_count().saturating_sub(1);
    }

    /// Changes the page size, keeping the first row of the current page
    /// visible on the new page that contains it.
    ///
    /// # Errors
    ///
    /// Returns [`PagingError::ZeroPageSize`] if `page_size` is zero; the
    /// state is left unchanged.
    pub fn rebase_page_size(&mut self, page_size: usize) -> Result<(), PagingError> {
        if page_size == 0 {
            return Err(PagingError::ZeroPageSize);
        }
        let first_visible = self.page_index * self.page_size;
        self.page_index = first_visible / page_size;
        self.page_size = page_size;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::PageState;
    use crate::{PageWindow, PagingError};

    fn counted(page_size: usize, count: usize) -> PageState {
        let mut state = PageState::new(page_size).unwrap();
        state.set_count(count);
        state
    }

    #[test]
    fn pages_partition_the_row_count() {
        // 23 rows at 5 per page: 5 pages, the last holding 3.
        let mut state = counted(5, 23);
        assert_eq!(state.page_count(), 5);
        assert_eq!(state.window(), PageWindow::new(0, 5));

        state.last_page();
        assert_eq!(state.page_index(), 4);
        assert_eq!(state.rows_on_page(4), 3);
        // The window stays a full page; only 3 of its rows get declared.
        assert_eq!(state.window(), PageWindow::new(20, 25));

        let total: usize = (0..state.page_count()).map(|i| state.rows_on_page(i)).sum();
        assert_eq!(total, 23);
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut state = counted(5, 23);
        state.prev_page();
        assert_eq!(state.page_index(), 0);

        for _ in 0..10 {
            state.next_page();
        }
        assert_eq!(state.page_index(), 4);

        state.first_page();
        assert_eq!(state.page_index(), 0);
    }

    #[test]
    fn an_exact_multiple_has_no_ragged_page() {
        let state = counted(5, 20);
        assert_eq!(state.page_count(), 4);
        assert_eq!(state.rows_on_page(3), 5);
        assert_eq!(state.rows_on_page(4), 0);
    }

    #[test]
    fn a_fresh_state_windows_the_first_page_before_any_count() {
        // The count is only discovered by declaring rows through the
        // window, so it must not gate the window.
        let state = PageState::new(5).unwrap();
        assert_eq!(state.count(), 0);
        assert_eq!(state.page_count(), 0);
        assert_eq!(state.window(), PageWindow::new(0, 5));
    }

    #[test]
    fn a_stale_index_windows_rows_that_no_longer_exist() {
        let mut state = counted(5, 23);
        state.last_page();
        state.set_count(3);
        // Page 4 windows rows 20..25, none of which get declared now.
        assert_eq!(state.window(), PageWindow::new(20, 25));
        assert_eq!(state.rows_on_page(4), 0);
        state.next_page();
        assert_eq!(state.page_index(), 0);
    }

    #[test]
    fn parts_round_trip() {
        let mut state = counted(5, 23);
        state.next_page();
        let parts = state.to_parts();
        assert_eq!(parts, [5, 1, 23]);
        assert_eq!(PageState::from_parts(parts).unwrap(), state);
        assert_eq!(
            PageState::from_parts([0, 0, 0]),
            Err(PagingError::ZeroPageSize)
        );
    }

    #[test]
    fn rebasing_keeps_the_first_visible_row() {
        let mut state = counted(5, 40);
        state.next_page();
        state.next_page();
        // First visible row is 10; at size 4 that row lives on page 2.
        state.rebase_page_size(4).unwrap();
        assert_eq!(state.page_index(), 2);
        assert!(state.window().contains(10));

        assert_eq!(state.rebase_page_size(0), Err(PagingError::ZeroPageSize));
        assert_eq!(state.page_size(), 4);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert_eq!(PageState::new(0), Err(PagingError::ZeroPageSize));
    }
}
