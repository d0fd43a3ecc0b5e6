//! Seams between callers, the relational store and the SQL driver.

pub mod database;
pub mod driver;
pub mod table;

pub use database::SqlDatabase;
pub use driver::{DriverError, SqlDriver};
pub use table::TableSchema;
