//! Error types for the datamapper workspace.

pub mod config_error;
pub mod error_code;
pub mod query_error;

pub use config_error::ConfigError;
pub use query_error::QueryError;

/// Convenience type alias.
pub type QueryResult<T> = Result<T, QueryError>;
