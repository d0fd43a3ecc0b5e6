//! `RelationalStore`: runs statements through the normalizer, the driver
//! and the profiler.
//!
//! Every statement path: normalize binds, open a profile record, dispatch
//! to the driver, finish the record, then surface any driver failure as
//! `QueryError::Driver`. The record is finished whether or not the driver
//! succeeded.

use std::sync::Arc;

use datamapper_core::{
    Binds, DataMapperConfig, DriverError, QueryError, QueryResult, Row, SqlDatabase, SqlDriver,
};
use tracing::{debug, info, warn};

use crate::connection::SqliteDriver;
use crate::profiler::QueryProfiler;
use crate::sql::bulk_insert::build_bulk_insert;
use crate::sql::normalizer::{normalize, NormalizedStatement};

/// Owns one driver connection and an optional profiler.
///
/// Not meant for concurrent use: one store per connection, serialized by
/// the caller.
pub struct RelationalStore<D: SqlDriver = SqliteDriver> {
    driver: D,
    profiler: Option<Arc<QueryProfiler>>,
}

impl RelationalStore<SqliteDriver> {
    /// Open the configured database. A profiler is attached with the
    /// configured enabled state, so it can be switched on later.
    pub fn open(config: &DataMapperConfig) -> QueryResult<Self> {
        let driver = SqliteDriver::open(&config.database)?;
        let profiler = QueryProfiler::new();
        profiler.set_enabled(config.profiler.enabled);
        Ok(Self::new(driver, Some(Arc::new(profiler))))
    }

    /// In-memory database without a profiler (for testing).
    pub fn open_in_memory() -> QueryResult<Self> {
        Ok(Self::new(SqliteDriver::open_in_memory()?, None))
    }
}

impl<D: SqlDriver> RelationalStore<D> {
    pub fn new(driver: D, profiler: Option<Arc<QueryProfiler>>) -> Self {
        Self { driver, profiler }
    }

    /// Attach a profiler, replacing any existing one.
    pub fn with_profiler(mut self, profiler: Arc<QueryProfiler>) -> Self {
        self.profiler = Some(profiler);
        self
    }

    pub fn profiler(&self) -> Option<&Arc<QueryProfiler>> {
        self.profiler.as_ref()
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    fn dispatch<T>(
        &self,
        sql: &str,
        binds: &Binds,
        op: impl FnOnce(&D, &NormalizedStatement) -> Result<T, DriverError>,
    ) -> QueryResult<T> {
        let statement = normalize(sql, binds);
        debug!(sql = %statement.sql, binds = statement.binds.len(), "dispatching statement");

        let record = self
            .profiler
            .as_deref()
            .map(|p| p.start(&statement.sql, &statement.binds));
        let result = op(&self.driver, &statement);
        if let Some(record) = record {
            record.finish();
        }

        result.map_err(|e| {
            warn!(error = %e, sql = %statement.sql, "statement failed");
            QueryError::Driver {
                message: e.message,
                sql: statement.sql.clone(),
            }
        })
    }

    fn transaction_err(e: DriverError, sql: &str) -> QueryError {
        QueryError::Driver {
            message: e.message,
            sql: sql.to_string(),
        }
    }
}

impl<D: SqlDriver> SqlDatabase for RelationalStore<D> {
    fn query(&self, sql: &str, binds: &Binds) -> QueryResult<Vec<Row>> {
        self.dispatch(sql, binds, |driver, stmt| {
            driver.fetch_all(&stmt.sql, &stmt.binds)
        })
    }

    fn execute(&self, sql: &str, binds: &Binds) -> QueryResult<()> {
        self.dispatch(sql, binds, |driver, stmt| {
            driver.execute(&stmt.sql, &stmt.binds).map(|_| ())
        })
    }

    fn bulk_insert(&self, table: &str, rows: &[Row]) -> QueryResult<()> {
        let (sql, binds) = build_bulk_insert(table, rows)?;
        self.execute(&sql, &binds)
    }

    fn last_inserted_id(&self) -> String {
        self.driver.last_insert_id()
    }

    fn begin_transaction(&self) -> QueryResult<()> {
        if self.driver.in_transaction() {
            return Ok(());
        }
        self.driver
            .begin()
            .map_err(|e| Self::transaction_err(e, "BEGIN"))?;
        info!("transaction started");
        Ok(())
    }

    fn commit_transaction(&self) -> QueryResult<()> {
        if !self.driver.in_transaction() {
            return Ok(());
        }
        self.driver
            .commit()
            .map_err(|e| Self::transaction_err(e, "COMMIT"))?;
        info!("transaction committed");
        Ok(())
    }

    fn rollback_transaction(&self) -> QueryResult<()> {
        if !self.driver.in_transaction() {
            return Ok(());
        }
        self.driver
            .rollback()
            .map_err(|e| Self::transaction_err(e, "ROLLBACK"))?;
        info!("transaction rolled back");
        Ok(())
    }
}
