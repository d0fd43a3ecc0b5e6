//! # datamapper-core
//!
//! Foundation crate for the datamapper SQL access layer.
//! Defines the value types, errors, config, tracing setup and the traits
//! that sit between callers, the relational store and the SQL driver.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::DataMapperConfig;
pub use errors::error_code::DataMapperErrorCode;
pub use errors::{ConfigError, QueryError, QueryResult};
pub use traits::{DriverError, SqlDatabase, SqlDriver, TableSchema};
pub use types::{BindValue, Binds, Row, Scalar};
