//! Multi-row INSERT synthesis.

use datamapper_core::{Binds, QueryError, QueryResult, Row};

/// Build one `INSERT INTO table (cols) VALUES (...),(...)` statement.
///
/// Columns come from the first row; every other row must list the same
/// columns in the same order. Bind keys are `row<i>_<column>`, which can
/// never collide with the normalizer's `in_*` or the condition builder's
/// `v_*` keys.
pub fn build_bulk_insert(table: &str, rows: &[Row]) -> QueryResult<(String, Binds)> {
    let first = rows.first().ok_or_else(|| QueryError::EmptyBulkInsert {
        table: table.to_string(),
    })?;
    let columns: Vec<&str> = first.columns().collect();

    let mut binds = Binds::new();
    let mut tuples = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        if !row.columns().eq(columns.iter().copied()) {
            return Err(QueryError::RaggedBulkInsert {
                table: table.to_string(),
                row: index,
                expected: columns.iter().map(|c| c.to_string()).collect(),
                found: row.columns().map(str::to_string).collect(),
            });
        }

        let mut placeholders = Vec::with_capacity(columns.len());
        for (column, value) in row.iter() {
            let key = format!("row{index}_{column}");
            placeholders.push(format!(":{key}"));
            binds.insert(key, value.clone());
        }
        tuples.push(format!("({})", placeholders.join(",")));
    }

    let sql = format!(
        "INSERT INTO {table} ({}) VALUES {}",
        columns.join(", "),
        tuples.join(",")
    );
    Ok((sql, binds))
}
