//! `SqlDatabase` trait: the caller-facing statement surface.

use crate::errors::QueryResult;
use crate::types::{Binds, Row};

/// Runs statements with named binds. List binds are expanded for
/// `IN (...)` clauses before the statement reaches the driver.
///
/// Transaction calls are idempotent: beginning inside a transaction, or
/// committing / rolling back outside one, does nothing.
pub trait SqlDatabase {
    /// Run a query and return every row.
    fn query(&self, sql: &str, binds: &Binds) -> QueryResult<Vec<Row>>;

    /// Run a query and return its first row, if any.
    fn query_one(&self, sql: &str, binds: &Binds) -> QueryResult<Option<Row>> {
        Ok(self.query(sql, binds)?.into_iter().next())
    }

    /// Run a statement that returns no rows.
    fn execute(&self, sql: &str, binds: &Binds) -> QueryResult<()>;

    /// Insert every row with a single multi-row INSERT. All rows must have
    /// the same columns in the same order.
    fn bulk_insert(&self, table: &str, rows: &[Row]) -> QueryResult<()>;

    fn last_inserted_id(&self) -> String;

    fn begin_transaction(&self) -> QueryResult<()>;

    fn commit_transaction(&self) -> QueryResult<()>;

    fn rollback_transaction(&self) -> QueryResult<()>;
}
