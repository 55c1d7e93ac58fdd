// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! rowlite - A lightweight typed result-cursor layer for SQL query results
//!
//! This crate sits between an application and the row/column result data a
//! relational client produces: the transport hands back untyped cells
//! (SQL NULL or text), and calling code declares the semantic column types
//! it wants at compile time. The layer performs checked conversion and
//! offers three ways to traverse a result set from the same cursor state,
//! without re-querying:
//!
//! - manual cursor access (`get_value`, `fetch`, `seek`/`next`/`eof`);
//! - callback-driven traversal (`each`) with values bound positionally
//!   from the callback's own parameter list;
//! - typed sequence iteration (`typed_rows`) for `for`-loop consumption.
//!
//! # Quick Start
//!
//! ```no_run
//! use rowlite::{Connection, MemoryTransport};
//!
//! let conn = Connection::new(MemoryTransport::new());
//!
//! let mut result = conn.query("SELECT id, name, weight FROM person");
//! result.each(|id: i32, name: String, weight: Option<f64>| {
//!     println!("{} {} {:?}", id, name, weight);
//!     true // false stops the traversal
//! });
//! ```
//!
//! # Failure model
//!
//! Row-level problems never abort a traversal: a NULL or malformed cell
//! leaves a plain destination untouched and reports `false` per field,
//! while `Option<T>` destinations absorb it as `None`. Only the absence
//! of a result set (a failed query) fails whole operations, also through
//! return values; nothing here panics on data.
//!
//! # Module Organization
//!
//! - [`convert`] - typed-value conversion traits and implementations
//! - [`result`] - result-set handle, row cursor, callback binder, iterator
//! - [`session`] - transport seam and connection handle
//! - [`error`] - error types and handling

pub mod convert;
pub mod error;
pub mod result;
pub mod session;

// Re-export main types for convenience
pub use convert::{BindValue, FromCell};
pub use error::{ConvertError, ResultSetError, TransportError};
pub use result::{FetchRow, ResultSet, RowCallback, RowCursor, RowTuple, TypedRows};
pub use session::{Connection, MemoryTransport, Transport};
