// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Arity-matching callback binding
//!
//! [`RowCursor::each`] drives a callback over every row, pulling one
//! typed value per declared callback parameter from columns 0..N-1. The
//! arity and parameter types are fixed at the call site by the callback's
//! own signature; each arity is a separate [`RowCallback`] impl, so the
//! dispatch is entirely compile-time, with no runtime inspection of the row.
//!
//! ```ignore
//! let visited = cursor.each(|id: i32, name: String, weight: Option<f64>| {
//!     println!("{} {} {:?}", id, name, weight);
//!     true // false stops the traversal
//! });
//! ```

use crate::convert::BindValue;
use crate::result::cursor::RowCursor;

/// A callback invocable with typed values bound from the current row.
///
/// `Args` is the tuple of the callback's declared parameter types; it
/// exists only to let each arity be a distinct impl for the same `FnMut`.
pub trait RowCallback<Args> {
    /// Bind columns 0..N-1 of the current row and invoke the callback.
    /// Returns the callback's continue/stop decision.
    fn call_row(&mut self, cursor: &mut RowCursor) -> bool;
}

impl<F> RowCallback<()> for F
where
    F: FnMut() -> bool,
{
    // Arity-zero base case: invoked once per row with nothing bound.
    fn call_row(&mut self, _cursor: &mut RowCursor) -> bool {
        self()
    }
}

macro_rules! impl_row_callback {
    ($($idx:tt $var:ident $ty:ident),+) => {
        impl<F, $($ty),+> RowCallback<($($ty,)+)> for F
        where
            F: FnMut($($ty),+) -> bool,
            $($ty: BindValue + Default,)+
        {
            fn call_row(&mut self, cursor: &mut RowCursor) -> bool {
                $(
                    let mut $var = <$ty>::default();
                    cursor.get_value($idx, &mut $var);
                )+
                self($($var),+)
            }
        }
    };
}

impl_row_callback!(0 a A);
impl_row_callback!(0 a A, 1 b B);
impl_row_callback!(0 a A, 1 b B, 2 c C);
impl_row_callback!(0 a A, 1 b B, 2 c C, 3 d D);
impl_row_callback!(0 a A, 1 b B, 2 c C, 3 d D, 4 e E);
impl_row_callback!(0 a A, 1 b B, 2 c C, 3 d D, 4 e E, 5 f F2);
impl_row_callback!(0 a A, 1 b B, 2 c C, 3 d D, 4 e E, 5 f F2, 6 g G);
impl_row_callback!(0 a A, 1 b B, 2 c C, 3 d D, 4 e E, 5 f F2, 6 g G, 7 h H);

impl RowCursor {
    /// Iterate over all rows from the start, invoking `callback` once per
    /// row with typed values bound from columns 0..N-1.
    ///
    /// Returns −1 when the cursor is unbound, 0 when there is no result
    /// data, otherwise the number of rows the callback was invoked for.
    /// The callback returning false stops the traversal after that row.
    pub fn each<Args, F>(&mut self, mut callback: F) -> i64
    where
        F: RowCallback<Args>,
    {
        if !self.is_valid() {
            return -1;
        }
        if self.count() == 0 {
            return 0;
        }

        self.reset();

        let mut visited = 0_i64;
        while !self.eof() {
            visited += 1;
            if !callback.call_row(self) {
                break;
            }
            self.next();
        }

        log::debug!("each traversal visited {} row(s)", visited);
        visited
    }
}
