// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Typed sequence view over a result set
//!
//! [`TypedRows`] presents the rows of a cursor as a finite, restartable
//! sequence of typed tuples, one tuple per row, materialized lazily: the
//! adaptor keeps a row index and a cached tuple, and any repositioning
//! drops the cache so the next dereference re-fetches.
//!
//! The adaptor exclusively borrows the cursor for the duration of the
//! traversal, so it owns positioning. Interleaved direct cursor calls
//! (the position races of shared-pointer iterator designs) are ruled out
//! by the borrow checker rather than documented away.
//!
//! ```ignore
//! for (id, name, weight) in cursor.typed_rows::<(i32, String, Option<f64>)>() {
//!     ...
//! }
//! ```

use crate::convert::BindValue;
use crate::result::cursor::RowCursor;

/// A fixed-arity tuple of typed values materialized from one row.
///
/// Implemented for tuples up to arity 8 whose elements implement
/// [`BindValue`] + [`Default`]; elements are bound from columns 0..N-1
/// of the cursor's current row.
pub trait RowTuple: Sized {
    /// Materialize the tuple from the cursor's current row.
    fn read_row(cursor: &mut RowCursor) -> Self;
}

macro_rules! impl_row_tuple {
    ($($idx:tt $var:ident $ty:ident),+) => {
        impl<$($ty),+> RowTuple for ($($ty,)+)
        where
            $($ty: BindValue + Default,)+
        {
            fn read_row(cursor: &mut RowCursor) -> Self {
                $(
                    let mut $var = <$ty>::default();
                    cursor.get_value($idx, &mut $var);
                )+
                ($($var,)+)
            }
        }
    };
}

impl_row_tuple!(0 a A);
impl_row_tuple!(0 a A, 1 b B);
impl_row_tuple!(0 a A, 1 b B, 2 c C);
impl_row_tuple!(0 a A, 1 b B, 2 c C, 3 d D);
impl_row_tuple!(0 a A, 1 b B, 2 c C, 3 d D, 4 e E);
impl_row_tuple!(0 a A, 1 b B, 2 c C, 3 d D, 4 e E, 5 f F);
impl_row_tuple!(0 a A, 1 b B, 2 c C, 3 d D, 4 e E, 5 f F, 6 g G);
impl_row_tuple!(0 a A, 1 b B, 2 c C, 3 d D, 4 e E, 5 f F, 6 g G, 7 h H);

/// Lazy, random-access typed view over a cursor's rows.
#[derive(Debug)]
pub struct TypedRows<'c, T: RowTuple> {
    cursor: &'c mut RowCursor,
    index: usize,
    end: usize,
    cached: Option<T>,
}

impl<'c, T: RowTuple> TypedRows<'c, T> {
    fn new(cursor: &'c mut RowCursor) -> Self {
        let end = cursor.count();
        TypedRows {
            cursor,
            index: 0,
            end,
            cached: None,
        }
    }

    /// Current position (0-based row index).
    pub fn position(&self) -> usize {
        self.index
    }

    /// Reposition to row `n`, dropping any cached tuple.
    pub fn seek(&mut self, n: usize) {
        self.index = n;
        self.cached = None;
    }

    /// Dereference without advancing: the tuple at the current position,
    /// or `None` past the end. Fetches lazily and caches until the
    /// position changes.
    pub fn peek(&mut self) -> Option<&T> {
        if self.index >= self.end {
            return None;
        }
        if self.cached.is_none() {
            self.cached = Some(self.materialize());
        }
        self.cached.as_ref()
    }

    fn materialize(&mut self) -> T {
        self.cursor.seek(self.index);
        T::read_row(self.cursor)
    }
}

impl<'c, T: RowTuple> Iterator for TypedRows<'c, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.index >= self.end {
            return None;
        }
        let item = match self.cached.take() {
            Some(cached) => cached,
            None => self.materialize(),
        };
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.index);
        (remaining, Some(remaining))
    }

    // Random access: skip by repositioning instead of stepping.
    fn nth(&mut self, n: usize) -> Option<T> {
        self.seek(self.index.saturating_add(n));
        self.next()
    }
}

impl<'c, T: RowTuple> ExactSizeIterator for TypedRows<'c, T> {}

impl<'c, T: RowTuple> std::iter::FusedIterator for TypedRows<'c, T> {}

impl RowCursor {
    /// View the rows as a typed sequence of `T` tuples (the container
    /// adaptor). The view borrows the cursor exclusively; the cursor's
    /// own position is clobbered by the traversal.
    pub fn typed_rows<T: RowTuple>(&mut self) -> TypedRows<'_, T> {
        TypedRows::new(self)
    }
}
