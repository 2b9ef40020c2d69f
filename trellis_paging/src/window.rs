// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Half-open range `[from, to)` of body row ordinals on the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    /// First body row ordinal on the page.
    pub from: usize,
    /// One past the last body row ordinal on the page.
    pub to: usize,
}

impl PageWindow {
    /// Creates a window from its bounds.
    #[must_use]
    pub const fn new(from: usize, to: usize) -> Self {
        debug_assert!(from <= to, "page window bounds are inverted");
        Self {
            from,
            to,
        }
    }

    /// Returns `true` if the body row with ordinal `index` is on the page.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index >= self.from && index < self.to
    }

    /// Number of rows on the page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.to - self.from
    }

    /// Returns `true` if the page holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}

#[cfg(test)]
mod tests {
    use super::PageWindow;

    #[test]
    fn the_window_is_half_open() {
        let window = PageWindow::new(10, 15);
        assert!(window.contains(10));
        assert!(window.contains(14));
        assert!(!window.contains(15));
        assert!(!window.contains(9));
        assert_eq!(window.len(), 5);
        assert!(!window.is_empty());
        assert!(PageWindow::new(3, 3).is_empty());
    }
}
