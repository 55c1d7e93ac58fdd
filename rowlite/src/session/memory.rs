// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! In-memory scripted transport
//!
//! A [`Transport`] backed by a FIFO of canned replies instead of a wire
//! session. Each executed query consumes the next reply and is recorded
//! in a submission log, which makes the full cursor/iterator surface
//! testable without a server and gives embedders a deterministic
//! stand-in transport.

use std::collections::VecDeque;

use crate::error::TransportError;
use crate::result::ResultSet;
use crate::session::Transport;

/// One scripted outcome for an executed query.
#[derive(Debug)]
pub enum Reply {
    /// Result data to hand to the cursor.
    Rows(ResultSet),
    /// Successful statement without result data.
    Statement,
    /// Failed query.
    Fail(TransportError),
}

/// Scripted in-memory transport: replies are consumed in push order.
///
/// When the script runs out, further queries answer as successful
/// statements without result data.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    replies: VecDeque<Reply>,
    queries: Vec<String>,
    insert_id: u64,
    closed: bool,
}

impl MemoryTransport {
    pub fn new() -> Self {
        MemoryTransport::default()
    }

    /// Script a result-data reply.
    pub fn push_rows(&mut self, set: ResultSet) {
        self.replies.push_back(Reply::Rows(set));
    }

    /// Script a "statement ok" reply.
    pub fn push_statement(&mut self) {
        self.replies.push_back(Reply::Statement);
    }

    /// Script a failure reply.
    pub fn push_fail(&mut self, err: TransportError) {
        self.replies.push_back(Reply::Fail(err));
    }

    /// Set the value reported by [`Transport::last_insert_id`].
    pub fn set_last_insert_id(&mut self, id: u64) {
        self.insert_id = id;
    }

    /// Every query string submitted so far, in order.
    pub fn queries(&self) -> &[String] {
        &self.queries
    }
}

impl Transport for MemoryTransport {
    fn execute(&mut self, query: &str) -> Result<Option<ResultSet>, TransportError> {
        if self.closed {
            return Err(TransportError::NotConnected);
        }
        self.queries.push(query.to_string());
        match self.replies.pop_front() {
            Some(Reply::Rows(set)) => Ok(Some(set)),
            Some(Reply::Statement) | None => Ok(None),
            Some(Reply::Fail(err)) => Err(err),
        }
    }

    fn last_insert_id(&self) -> u64 {
        self.insert_id
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
