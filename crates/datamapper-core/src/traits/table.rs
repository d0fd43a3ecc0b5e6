//! `TableSchema` trait: static description of a gateway's table.

/// Names the table and primary key a table gateway works on.
///
/// ```
/// use datamapper_core::TableSchema;
///
/// struct Users;
///
/// impl TableSchema for Users {
///     const TABLE: &'static str = "users";
///     const PRIMARY_KEY: &'static str = "id";
/// }
/// ```
pub trait TableSchema {
    const TABLE: &'static str;
    const PRIMARY_KEY: &'static str;
}
