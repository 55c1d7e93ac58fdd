// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for conversion, transport and result-set construction
//!
//! Row-level problems (SQL NULL, malformed cell text, missing result set)
//! are reported through boolean or `Option` returns on the cursor API and
//! never abort a traversal. The types here carry the taxonomy for the
//! places where an error value is useful: the lexical converter, the
//! transport boundary and result-set construction.

use thiserror::Error;

/// Failure to produce a typed value from one cell
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The cell is SQL NULL
    #[error("cell is NULL")]
    Null,

    /// The cell text does not lexically parse as the requested type
    #[error("cannot parse {value:?} as {target}")]
    Parse {
        /// Raw cell text that failed to parse
        value: String,
        /// Name of the requested target type
        target: &'static str,
    },
}

impl ConvertError {
    pub(crate) fn parse(value: &str, target: &'static str) -> Self {
        ConvertError::Parse {
            value: value.to_string(),
            target,
        }
    }
}

/// Errors reported by a [`Transport`](crate::session::Transport)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The server rejected the query
    #[error("query failed with code {code}: {message}")]
    QueryFailed {
        /// Transport-specific error code
        code: u32,
        /// Human-readable server message
        message: String,
    },

    /// The underlying session went away mid-exchange
    #[error("connection lost")]
    ConnectionLost,

    /// No open session to submit on
    #[error("not connected")]
    NotConnected,
}

/// Errors building a [`ResultSet`](crate::result::ResultSet)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResultSetError {
    /// A pushed row does not match the declared column count
    #[error("row has {got} cells, result set declares {expected} columns")]
    ColumnCountMismatch {
        /// Declared column count of the set
        expected: usize,
        /// Cell count of the offending row
        got: usize,
    },
}
