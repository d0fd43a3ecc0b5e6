//! Errors raised while building or running a statement.

use super::error_code::{self, DataMapperErrorCode};

/// Errors that can occur between the caller and the SQL driver.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The driver rejected the statement during prepare or execute.
    #[error("Query failed: {message}")]
    Driver { message: String, sql: String },

    #[error("Connection failed: {message}")]
    Connection { message: String },

    #[error("Condition `{fragment}` has {placeholders} placeholder(s) but {values} value(s)")]
    PlaceholderArity {
        fragment: String,
        placeholders: usize,
        values: usize,
    },

    #[error("Bulk insert into {table} requires at least one row")]
    EmptyBulkInsert { table: String },

    #[error("Bulk insert into {table}: row {row} has columns {found:?}, expected {expected:?}")]
    RaggedBulkInsert {
        table: String,
        row: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Unexpected result: {message}")]
    UnexpectedResult { message: String },
}

impl QueryError {
    /// The diagnostic text reported by the driver, if this is a driver failure.
    pub fn driver_message(&self) -> Option<&str> {
        match self {
            Self::Driver { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl DataMapperErrorCode for QueryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Driver { .. } => error_code::QUERY_FAILED,
            Self::Connection { .. } => error_code::CONNECTION_FAILED,
            Self::UnexpectedResult { .. } => error_code::UNEXPECTED_RESULT,
            Self::PlaceholderArity { .. }
            | Self::EmptyBulkInsert { .. }
            | Self::RaggedBulkInsert { .. } => error_code::PRECONDITION_FAILED,
        }
    }
}
