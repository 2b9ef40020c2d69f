// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types shared across the table layout: constraints, alignment,
//! cell addressing, and row flags.

use kurbo::{Point, Size};

use crate::util::round_half_up;

/// Layout constraints handed down from the host layout system.
///
/// Unbounded dimensions are expressed as [`f64::INFINITY`]. Minimums are
/// expected to be finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    /// Minimum width the measured table must occupy.
    pub min_width: f64,
    /// Maximum width available, or [`f64::INFINITY`] when unbounded.
    pub max_width: f64,
    /// Minimum height the measured table must occupy.
    pub min_height: f64,
    /// Maximum height available, or [`f64::INFINITY`] when unbounded.
    pub max_height: f64,
}

impl Constraints {
    /// Constraints with no minimum and unbounded maximums.
    pub const UNBOUNDED: Self = Self {
        min_width: 0.0,
        max_width: f64::INFINITY,
        min_height: 0.0,
        max_height: f64::INFINITY,
    };

    /// Creates constraints from explicit bounds.
    #[must_use]
    pub const fn new(min_width: f64, max_width: f64, min_height: f64, max_height: f64) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Constraints that force exactly `size`.
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        Self {
            min_width: size.width,
            max_width: size.width,
            min_height: size.height,
            max_height: size.height,
        }
    }

    /// Constraints bounded above by `size`, with no minimum.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self {
            min_width: 0.0,
            max_width: size.width,
            min_height: 0.0,
            max_height: size.height,
        }
    }

    /// Returns `true` if the maximum width is finite.
    #[must_use]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    /// Returns `true` if the maximum height is finite.
    #[must_use]
    pub fn has_bounded_height(&self) -> bool {
        self.max_height.is_finite()
    }

    /// Clamps `size` into these constraints.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }
}

/// Horizontal layout direction of the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutDirection {
    /// Left to right.
    Ltr,
    /// Right to left. Column order and in-cell alignment are mirrored.
    Rtl,
}

/// Horizontal alignment of a cell within its column slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Leading edge (left in LTR, right in RTL).
    Start,
    /// Centered, with the offset rounded half-up.
    Center,
    /// Trailing edge (right in LTR, left in RTL).
    End,
}

/// Vertical alignment of a cell within its row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAlignment {
    /// Top edge.
    Top,
    /// Centered, with the offset rounded half-up.
    Center,
    /// Bottom edge.
    Bottom,
}

/// Two-dimensional alignment of a cell within the box spanned by its column
/// width and row height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellAlignment {
    /// Horizontal component.
    pub horizontal: HorizontalAlignment,
    /// Vertical component.
    pub vertical: VerticalAlignment,
}

impl CellAlignment {
    /// Leading edge, vertically centered. The default for table columns.
    pub const START_CENTER: Self = Self::new(HorizontalAlignment::Start, VerticalAlignment::Center);
    /// Centered on both axes.
    pub const CENTER: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Center);
    /// Trailing edge, vertically centered.
    pub const END_CENTER: Self = Self::new(HorizontalAlignment::End, VerticalAlignment::Center);
    /// Leading top corner.
    pub const START_TOP: Self = Self::new(HorizontalAlignment::Start, VerticalAlignment::Top);

    /// Creates an alignment from its two components.
    #[must_use]
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Returns the offset of an `item`-sized box aligned inside `space`.
    ///
    /// Offsets may be negative when `item` is larger than `space`; the item
    /// then overflows its slot and hosts are expected to clip it.
    #[must_use]
    pub fn align(&self, item: Size, space: Size, direction: LayoutDirection) -> Point {
        let horizontal = match direction {
            LayoutDirection::Ltr => self.horizontal,
            LayoutDirection::Rtl => match self.horizontal {
                HorizontalAlignment::Start => HorizontalAlignment::End,
                HorizontalAlignment::Center => HorizontalAlignment::Center,
                HorizontalAlignment::End => HorizontalAlignment::Start,
            },
        };
        let x = match horizontal {
            HorizontalAlignment::Start => 0.0,
            HorizontalAlignment::Center => round_half_up((space.width - item.width) / 2.0),
            HorizontalAlignment::End => space.width - item.width,
        };
        let y = match self.vertical {
            VerticalAlignment::Top => 0.0,
            VerticalAlignment::Center => round_half_up((space.height - item.height) / 2.0),
            VerticalAlignment::Bottom => space.height - item.height,
        };
        Point::new(x, y)
    }
}

impl Default for CellAlignment {
    fn default() -> Self {
        Self::START_CENTER
    }
}

/// Address of a cell inside the table: row-major arena indices.
///
/// Cell content is owned by the host; the layout core refers to it only
/// through these indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellRef {
    /// Row index, in declaration order.
    pub row: usize,
    /// Column index.
    pub column: usize,
}

impl CellRef {
    /// Creates a cell reference.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
        }
    }
}

bitflags::bitflags! {
    /// Row-level flags controlling pinning and interaction.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RowFlags: u8 {
        /// Row is pinned to the top of the viewport, above body rows.
        const HEADER    = 0b0000_0001;
        /// Row is pinned to the bottom of the viewport, below body rows.
        const FOOTER    = 0b0000_0010;
        /// Row reacts to clicks; the host wires the actual handler.
        const CLICKABLE = 0b0000_0100;
    }
}

/// Packed RGBA row background color.
///
/// The layout core never interprets the value; it is carried through to the
/// placement output for the host to paint with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba(pub u32);

impl Rgba {
    /// Creates a color from 8-bit channels.
    #[must_use]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }
}
