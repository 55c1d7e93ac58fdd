// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Row cursor over a buffered result set
//!
//! [`RowCursor`] tracks the current row position within a [`ResultSet`]
//! and performs typed cell access through the conversion traits. Three
//! cursor-level states are observable by callers:
//!
//! - unbound: the query failed, `is_valid()` is false and every read or
//!   navigation call reports failure without side effects;
//! - bound without rows: a successful statement that produced no result
//!   data, or a result set with zero rows;
//! - bound with N rows: normal traversal.
//!
//! Reads start the cursor on first touch: the first `eof()`, `get_value()`
//! or `fetch()` on an unpositioned cursor implicitly seeks to row 0, so a
//! plain read loop needs no explicit `reset()`.
//!
//! Data-level problems (NULL cells, malformed text) never fail a whole
//! operation; they surface per field through [`BindValue::bind`].

use crate::convert::BindValue;
use crate::result::set::ResultSet;

/// Stateful cursor over one query's buffered result set.
#[derive(Debug, Default)]
pub struct RowCursor {
    /// True when the producing query executed successfully, even if it
    /// returned no result data.
    valid: bool,
    set: Option<ResultSet>,
    /// Index of the currently loaded row; `None` when unpositioned or
    /// past the last row.
    row: Option<usize>,
    /// Read position for the next `next()` call.
    next_row: usize,
    /// Distinguishes "never positioned" from "positioned past the end".
    started: bool,
}

impl RowCursor {
    /// Cursor for a failed query: no result set, every operation a no-op.
    pub fn unbound() -> Self {
        RowCursor::default()
    }

    /// Cursor for a successful statement that returned no result data
    /// (DML, DDL). Valid but with nothing to read.
    pub fn statement() -> Self {
        RowCursor {
            valid: true,
            ..RowCursor::default()
        }
    }

    /// Cursor over a buffered result set. Takes exclusive ownership of
    /// the handle.
    pub fn from_set(set: ResultSet) -> Self {
        RowCursor {
            valid: true,
            set: Some(set),
            ..RowCursor::default()
        }
    }

    /// True if the producing query executed successfully.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Total row count; 0 when no result set is bound.
    pub fn count(&self) -> usize {
        self.set.as_ref().map_or(0, ResultSet::row_count)
    }

    /// Column count; 0 when no result set is bound.
    pub fn fields(&self) -> usize {
        self.set.as_ref().map_or(0, ResultSet::column_count)
    }

    /// True if the query returned no rows.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// True when unbound or positioned past the last row. Starts the
    /// cursor if it has not been positioned yet.
    pub fn eof(&mut self) -> bool {
        if self.set.is_none() {
            return true;
        }
        if !self.started {
            self.reset();
        }
        self.row.is_none()
    }

    /// Seek to row 0 and load it. Returns false when unbound or empty.
    pub fn reset(&mut self) -> bool {
        self.seek(0)
    }

    /// Absolute positioning: load row `n`. Seeking past the last row
    /// leaves the cursor exhausted and returns false.
    pub fn seek(&mut self, n: usize) -> bool {
        let Some(set) = self.set.as_ref() else {
            return false;
        };
        self.started = true;
        if n < set.row_count() {
            log::trace!("cursor seek to row {}", n);
            self.row = Some(n);
            self.next_row = n + 1;
            true
        } else {
            self.row = None;
            self.next_row = set.row_count();
            false
        }
    }

    /// Load the following row. Returns false once past the last row.
    pub fn next(&mut self) -> bool {
        let Some(set) = self.set.as_ref() else {
            return false;
        };
        self.started = true;
        if self.next_row < set.row_count() {
            self.row = Some(self.next_row);
            self.next_row += 1;
            true
        } else {
            self.row = None;
            false
        }
    }

    /// Position marker for the current row, reusable with [`seek`].
    /// `None` when no row is loaded.
    ///
    /// [`seek`]: RowCursor::seek
    pub fn tell(&self) -> Option<usize> {
        self.row
    }

    /// Convert column `index` of the current row into `value`.
    ///
    /// Returns false when unbound, exhausted, the column index is out of
    /// range, or the per-field conversion reports failure; the
    /// destination is left untouched in every failure case. Starts the
    /// cursor on first touch.
    pub fn get_value<V: BindValue>(&mut self, index: usize, value: &mut V) -> bool {
        if !self.started {
            self.reset();
        }
        let (Some(set), Some(row)) = (self.set.as_ref(), self.row) else {
            return false;
        };
        match set.cell(row, index) {
            Some(cell) => value.bind(cell),
            None => false,
        }
    }

    /// Column `index` of the current row as `V`, or `V::default()` when
    /// no value could be produced.
    pub fn value<V: BindValue + Default>(&mut self, index: usize) -> V {
        let mut v = V::default();
        self.get_value(index, &mut v);
        v
    }

    /// First column of the current row as `V`, the scalar-query
    /// convenience form (`SELECT COUNT(*) ...`).
    pub fn single<V: BindValue + Default>(&mut self) -> V {
        self.value(0)
    }

    /// Convert columns 0..N-1 of the current row into a tuple of `&mut`
    /// destinations, in column order. Does not advance the cursor.
    ///
    /// Returns false when unbound or exhausted; per-field conversion
    /// failures do not fail the call. Starts the cursor on first touch.
    pub fn fetch<T: FetchRow>(&mut self, targets: T) -> bool {
        if !self.started {
            self.reset();
        }
        if self.set.is_none() || self.row.is_none() {
            return false;
        }
        targets.fetch_into(self);
        true
    }
}

/// A tuple of `&mut` destinations that [`RowCursor::fetch`] fills from
/// columns 0..N-1, emulating the variadic fetch of the C-client wrappers.
pub trait FetchRow {
    /// Bind each destination from its positional column.
    fn fetch_into(self, cursor: &mut RowCursor);
}

macro_rules! impl_fetch_row {
    ($($idx:tt $ty:ident),+) => {
        impl<'a, $($ty: BindValue),+> FetchRow for ($(&'a mut $ty,)+) {
            fn fetch_into(self, cursor: &mut RowCursor) {
                $(cursor.get_value($idx, self.$idx);)+
            }
        }
    };
}

impl_fetch_row!(0 A);
impl_fetch_row!(0 A, 1 B);
impl_fetch_row!(0 A, 1 B, 2 C);
impl_fetch_row!(0 A, 1 B, 2 C, 3 D);
impl_fetch_row!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_fetch_row!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_fetch_row!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_fetch_row!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);
