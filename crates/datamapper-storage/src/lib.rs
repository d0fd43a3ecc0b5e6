//! # datamapper-storage
//!
//! Statement execution for the datamapper SQL access layer.
//! Rewrites list binds and WHERE conditions into named-placeholder SQL,
//! runs it over a SQLite connection, profiles every statement and
//! offers per-table CRUD gateways.

pub mod connection;
pub mod gateway;
pub mod profiler;
pub mod sql;
pub mod store;

pub use connection::SqliteDriver;
pub use gateway::{SelectOptions, TableGateway};
pub use profiler::{ProfileRecord, QueryProfiler};
pub use sql::conditions::{Condition, Conditions, WhereClause};
pub use sql::normalizer::{normalize, NormalizedStatement};
pub use store::RelationalStore;
