// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Result-set handle, row cursor and typed consumption adaptors
//!
//! This module provides the three consumption modes over one query's
//! buffered result data:
//! - direct typed access through [`RowCursor`] (`get_value`, `fetch`);
//! - callback-driven traversal (`each`, see [`each`](crate::result::each));
//! - typed sequence iteration ([`TypedRows`]).

pub mod cursor;
pub mod each;
pub mod iter;
pub mod set;

// Re-export the main types for convenience
pub use cursor::{FetchRow, RowCursor};
pub use each::RowCallback;
pub use iter::{RowTuple, TypedRows};
pub use set::ResultSet;
