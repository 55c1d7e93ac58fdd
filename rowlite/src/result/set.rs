// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Buffered result-set handle
//!
//! A [`ResultSet`] owns the full row/column buffer produced by one query
//! execution: every cell is either SQL NULL or the server's textual
//! rendering of the value. The handle is move-only; exactly one
//! [`RowCursor`](crate::result::RowCursor) owns it at a time, so the
//! buffer is released exactly once.

use crate::error::ResultSetError;

/// The buffered rows and column metadata returned by one query execution.
///
/// Deliberately not `Clone`: ownership transfers by move only.
#[derive(Debug, Default)]
pub struct ResultSet {
    columns: usize,
    rows: Vec<Vec<Option<String>>>,
}

impl ResultSet {
    /// Create an empty set with a fixed column count.
    pub fn new(columns: usize) -> Self {
        ResultSet {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a set from complete rows, checking widths up front.
    pub fn from_rows(
        columns: usize,
        rows: Vec<Vec<Option<String>>>,
    ) -> Result<Self, ResultSetError> {
        let mut set = ResultSet::new(columns);
        for row in rows {
            set.push_row(row)?;
        }
        Ok(set)
    }

    /// Append one row; its cell count must match the declared column count.
    pub fn push_row(&mut self, row: Vec<Option<String>>) -> Result<(), ResultSetError> {
        if row.len() != self.columns {
            return Err(ResultSetError::ColumnCountMismatch {
                expected: self.columns,
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Number of buffered rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Declared column count.
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Raw cell at (row, column); outer `None` means out of bounds,
    /// inner `None` means SQL NULL.
    pub fn cell(&self, row: usize, column: usize) -> Option<Option<&str>> {
        if column >= self.columns {
            return None;
        }
        self.rows
            .get(row)
            .map(|r| r.get(column).and_then(|c| c.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn push_row_checks_width() {
        let mut set = ResultSet::new(2);
        assert!(set.push_row(vec![text("1"), None]).is_ok());
        let err = set.push_row(vec![text("1")]).unwrap_err();
        assert_eq!(
            err,
            ResultSetError::ColumnCountMismatch {
                expected: 2,
                got: 1
            }
        );
        assert_eq!(set.row_count(), 1);
    }

    #[test]
    fn cell_distinguishes_null_from_out_of_bounds() {
        let set = ResultSet::from_rows(2, vec![vec![text("a"), None]]).unwrap();
        assert_eq!(set.cell(0, 0), Some(Some("a")));
        assert_eq!(set.cell(0, 1), Some(None));
        assert_eq!(set.cell(0, 2), None);
        assert_eq!(set.cell(1, 0), None);
    }
}
