//! Values that flow between callers, the store and the driver.

pub mod binds;
pub mod row;
pub mod value;

pub use binds::Binds;
pub use row::Row;
pub use value::{BindValue, Scalar};
