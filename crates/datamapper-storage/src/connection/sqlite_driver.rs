//! `SqliteDriver`: `SqlDriver` over a single `rusqlite::Connection`.
//!
//! Binds are matched to placeholders by name. A bind without a placeholder,
//! a placeholder without a bind, and positional `?` placeholders are all
//! rejected before the statement runs.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use datamapper_core::config::DatabaseConfig;
use datamapper_core::{DriverError, QueryError, QueryResult, Row, Scalar, SqlDriver};
use rusqlite::{Connection, Statement};
use tracing::info;

use super::pragmas::apply_pragmas;

pub struct SqliteDriver {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteDriver {
    /// Open the database described by `config` and apply its pragmas.
    /// No path means an in-memory database.
    pub fn open(config: &DatabaseConfig) -> QueryResult<Self> {
        let conn = match &config.path {
            Some(path) => Connection::open(path),
            None => Connection::open_in_memory(),
        }
        .map_err(connection_err)?;
        apply_pragmas(&conn, config).map_err(connection_err)?;

        match &config.path {
            Some(path) => info!(path = %path.display(), "opened sqlite database"),
            None => info!("opened in-memory sqlite database"),
        }

        Ok(Self {
            conn,
            path: config.path.clone(),
        })
    }

    /// Open an in-memory database with default pragmas (for testing).
    pub fn open_in_memory() -> QueryResult<Self> {
        Self::open(&DatabaseConfig::default())
    }

    /// Wrap an already configured connection.
    pub fn from_connection(conn: Connection) -> Self {
        let path = conn
            .path()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        Self { conn, path }
    }

    /// Raw connection access, for schema setup and other driver-level work.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn prepare_bound(
        &self,
        sql: &str,
        binds: &[(String, Scalar)],
    ) -> Result<Statement<'_>, DriverError> {
        let mut stmt = self.conn.prepare(sql).map_err(driver_err)?;

        for (key, value) in binds {
            let name = format!(":{key}");
            let index = stmt
                .parameter_index(&name)
                .map_err(driver_err)?
                .ok_or_else(|| {
                    DriverError::new(format!("bind {name} has no matching placeholder"))
                })?;
            stmt.raw_bind_parameter(index, value).map_err(driver_err)?;
        }

        let bound_keys: HashSet<&str> = binds.iter().map(|(key, _)| key.as_str()).collect();
        for index in 1..=stmt.parameter_count() {
            match stmt.parameter_name(index) {
                Some(name) => {
                    let bound = name
                        .strip_prefix(':')
                        .is_some_and(|bare| bound_keys.contains(bare));
                    if !bound {
                        return Err(DriverError::new(format!(
                            "placeholder {name} has no bound value"
                        )));
                    }
                }
                None => {
                    return Err(DriverError::new(format!(
                        "positional placeholder at index {index} is not supported; use named binds"
                    )));
                }
            }
        }

        Ok(stmt)
    }
}

impl SqlDriver for SqliteDriver {
    fn execute(&self, sql: &str, binds: &[(String, Scalar)]) -> Result<usize, DriverError> {
        let mut stmt = self.prepare_bound(sql, binds)?;
        stmt.raw_execute().map_err(driver_err)
    }

    fn fetch_all(&self, sql: &str, binds: &[(String, Scalar)]) -> Result<Vec<Row>, DriverError> {
        let mut stmt = self.prepare_bound(sql, binds)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut rows = stmt.raw_query();
        let mut out = Vec::new();
        while let Some(row) = rows.next().map_err(driver_err)? {
            let mut record = Row::new();
            for (i, column) in columns.iter().enumerate() {
                let value = row.get_ref(i).map_err(driver_err)?;
                record.set(column.as_str(), Scalar::from(value));
            }
            out.push(record);
        }
        Ok(out)
    }

    fn last_insert_id(&self) -> String {
        self.conn.last_insert_rowid().to_string()
    }

    fn begin(&self) -> Result<(), DriverError> {
        self.conn.execute_batch("BEGIN").map_err(driver_err)
    }

    fn commit(&self) -> Result<(), DriverError> {
        self.conn.execute_batch("COMMIT").map_err(driver_err)
    }

    fn rollback(&self) -> Result<(), DriverError> {
        self.conn.execute_batch("ROLLBACK").map_err(driver_err)
    }

    fn in_transaction(&self) -> bool {
        !self.conn.is_autocommit()
    }
}

// ─── Helpers: rusqlite errors ───────────────────────────────────────────────

fn driver_err(e: rusqlite::Error) -> DriverError {
    DriverError::new(e.to_string())
}

fn connection_err(e: rusqlite::Error) -> QueryError {
    QueryError::Connection {
        message: e.to_string(),
    }
}
