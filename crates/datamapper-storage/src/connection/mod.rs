//! SQLite connection: pragma setup and the `SqlDriver` implementation.

pub mod pragmas;
pub mod sqlite_driver;

pub use sqlite_driver::SqliteDriver;
