// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while declaring table content.

use core::fmt;

/// A structural consistency error in declared table content.
///
/// These are raised immediately at declaration time, never deferred to
/// measurement: a row with a mismatched cell count would desynchronize
/// column-width attribution for the whole table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclarationError {
    /// A row declared a different number of cells than the table has columns.
    CellCountMismatch {
        /// Index of the offending row, in declaration order.
        row: usize,
        /// Number of columns the table was declared with.
        columns: usize,
        /// Number of cells the row actually declared.
        cells: usize,
    },
}

impl fmt::Display for DeclarationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellCountMismatch {
                row,
                columns,
                cells,
            } => {
                if cells > columns {
                    write!(
                        f,
                        "row {row} has too many cells: declared {cells}, table has {columns} columns"
                    )
                } else {
                    write!(
                        f,
                        "row {row} doesn't have enough cells: declared {cells}, table has {columns} columns"
                    )
                }
            }
        }
    }
}

impl core::error::Error for DeclarationError {}

#[cfg(test)]
mod tests {
    use super::DeclarationError;
    use alloc::string::ToString;

    #[test]
    fn messages_identify_the_offending_row() {
        let err = DeclarationError::CellCountMismatch {
            row: 3,
            columns: 4,
            cells: 6,
        };
        assert_eq!(
            err.to_string(),
            "row 3 has too many cells: declared 6, table has 4 columns"
        );

        let err = DeclarationError::CellCountMismatch {
            row: 0,
            columns: 4,
            cells: 2,
        };
        assert_eq!(
            err.to_string(),
            "row 0 doesn't have enough cells: declared 2, table has 4 columns"
        );
    }
}
