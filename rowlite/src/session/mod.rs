// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query session boundary
//!
//! The cursor layer consumes buffered result sets; this module is the
//! seam that produces them. A [`Transport`] submits one query string and
//! answers with either a result set, "statement ok, no result data", or
//! an error. [`Connection`] wraps a transport behind a mutex so query
//! submission from multiple threads is serialized, and translates
//! transport outcomes into the three observable cursor states: a failed
//! query yields an unbound cursor, never a panic or an `Err` at the call
//! site.
//!
//! Connection establishment (addresses, credentials, timeouts) belongs to
//! the concrete transport, not to this layer.

pub mod memory;

use std::fmt;
use std::sync::{Mutex, MutexGuard};

use crate::error::TransportError;
use crate::result::{ResultSet, RowCursor};

pub use memory::MemoryTransport;

/// Synchronous query transport: one in-flight query at a time, blocking
/// for the duration of the round trip.
pub trait Transport {
    /// Execute one query. `Ok(Some(..))` carries buffered result data,
    /// `Ok(None)` is a successful statement without result data (DML,
    /// DDL), `Err` is a failed query.
    fn execute(&mut self, query: &str) -> Result<Option<ResultSet>, TransportError>;

    /// Identifier generated by the most recent insert, if the transport
    /// tracks one.
    fn last_insert_id(&self) -> u64 {
        0
    }

    /// Tear down the underlying session. Called once from
    /// [`Connection::close`]; dropping the transport afterwards must be
    /// safe.
    fn close(&mut self) {}
}

struct ConnectionState<T> {
    transport: Option<T>,
    last_error: Option<TransportError>,
}

/// A mutex-guarded session handle that turns transport outcomes into
/// row cursors.
pub struct Connection<T: Transport> {
    state: Mutex<ConnectionState<T>>,
}

impl<T: Transport> Connection<T> {
    /// Wrap an already-established transport.
    pub fn new(transport: T) -> Self {
        Connection {
            state: Mutex::new(ConnectionState {
                transport: Some(transport),
                last_error: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ConnectionState<T>> {
        // A poisoned lock only means another thread panicked mid-query;
        // the state itself stays usable.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// True while the transport has not been closed.
    pub fn is_open(&self) -> bool {
        self.lock().transport.is_some()
    }

    /// Close the underlying session. Subsequent queries yield unbound
    /// cursors.
    pub fn close(&self) {
        let mut state = self.lock();
        if let Some(mut transport) = state.transport.take() {
            transport.close();
        }
    }

    /// Execute a query and wrap its outcome in a cursor.
    ///
    /// A failed query returns an unbound cursor (`is_valid()` false) and
    /// records the error for [`last_error`](Connection::last_error).
    pub fn query(&self, sql: &str) -> RowCursor {
        let mut state = self.lock();
        let Some(transport) = state.transport.as_mut() else {
            state.last_error = Some(TransportError::NotConnected);
            return RowCursor::unbound();
        };

        log::debug!("executing query: {}", sql);
        match transport.execute(sql) {
            Ok(Some(set)) => {
                state.last_error = None;
                RowCursor::from_set(set)
            }
            Ok(None) => {
                state.last_error = None;
                RowCursor::statement()
            }
            Err(err) => {
                log::warn!("query failed: {}", err);
                state.last_error = Some(err);
                RowCursor::unbound()
            }
        }
    }

    /// Execute a query built with `format_args!`, the formatted-query
    /// convenience form.
    pub fn query_fmt(&self, args: fmt::Arguments<'_>) -> RowCursor {
        self.query(&args.to_string())
    }

    /// Execute a statement where no result data is expected. Returns
    /// true if the query executed successfully.
    pub fn exec(&self, sql: &str) -> bool {
        self.query(sql).is_valid()
    }

    /// Identifier generated by the most recent insert; 0 when closed or
    /// untracked.
    pub fn last_insert_id(&self) -> u64 {
        self.lock()
            .transport
            .as_ref()
            .map_or(0, Transport::last_insert_id)
    }

    /// The error recorded by the most recent failed query, cleared by
    /// the next successful one.
    pub fn last_error(&self) -> Option<TransportError> {
        self.lock().last_error.clone()
    }
}
