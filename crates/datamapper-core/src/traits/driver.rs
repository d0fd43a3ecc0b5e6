//! `SqlDriver` trait: the prepared-statement connection the store runs on.
//!
//! Implementations receive SQL that has already been normalized: every
//! placeholder is a named `:key` token and every bind is a single scalar.

use crate::types::{Row, Scalar};

/// Failure reported by the driver, carrying its diagnostic text.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct DriverError {
    pub message: String,
}

impl DriverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A prepared-statement capable SQL connection.
///
/// Binds are `(name, value)` pairs with names stored without the leading `:`.
pub trait SqlDriver {
    /// Prepare and run a statement, returning the number of affected rows.
    fn execute(&self, sql: &str, binds: &[(String, Scalar)]) -> Result<usize, DriverError>;

    /// Prepare and run a query, returning every row.
    fn fetch_all(&self, sql: &str, binds: &[(String, Scalar)]) -> Result<Vec<Row>, DriverError>;

    /// Id generated by the most recent insert on this connection.
    fn last_insert_id(&self) -> String;

    fn begin(&self) -> Result<(), DriverError>;

    fn commit(&self) -> Result<(), DriverError>;

    fn rollback(&self) -> Result<(), DriverError>;

    fn in_transaction(&self) -> bool;
}

