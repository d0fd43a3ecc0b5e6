//! `TableGateway`: CRUD over one table through any `SqlDatabase`.

use std::marker::PhantomData;

use datamapper_core::{binds, Binds, QueryError, QueryResult, Row, Scalar, SqlDatabase, TableSchema};

use crate::sql::conditions::Conditions;

/// ORDER BY / LIMIT / OFFSET for [`TableGateway::get_rows`].
///
/// No order means primary key ascending. A zero limit or offset is the
/// same as none.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectOptions {
    pub order: Vec<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl SelectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_by(mut self, term: impl Into<String>) -> Self {
        self.order.push(term.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Row-level access to the table named by `T`.
pub struct TableGateway<'db, T: TableSchema> {
    db: &'db dyn SqlDatabase,
    _table: PhantomData<T>,
}

impl<'db, T: TableSchema> TableGateway<'db, T> {
    pub fn new(db: &'db dyn SqlDatabase) -> Self {
        Self {
            db,
            _table: PhantomData,
        }
    }

    pub fn db(&self) -> &'db dyn SqlDatabase {
        self.db
    }

    pub fn get_by_id(&self, id: impl Into<Scalar>) -> QueryResult<Option<Row>> {
        let id: Scalar = id.into();
        let sql = format!("SELECT * FROM {} WHERE {} = :pk", T::TABLE, T::PRIMARY_KEY);
        self.db.query_one(&sql, &binds! { "pk" => id })
    }

    /// Rows for the given ids, primary key ascending. Duplicate ids are
    /// collapsed; no ids means no query.
    pub fn get_by_ids<I, V>(&self, ids: I) -> QueryResult<Vec<Row>>
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        let mut unique: Vec<Scalar> = Vec::new();
        for id in ids {
            let id: Scalar = id.into();
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        if unique.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT * FROM {table} WHERE {pk} IN (:ids) ORDER BY {pk} ASC",
            table = T::TABLE,
            pk = T::PRIMARY_KEY
        );
        self.db.query(&sql, &binds! { "ids" => unique })
    }

    pub fn get_rows(&self, conditions: &Conditions, options: &SelectOptions) -> QueryResult<Vec<Row>> {
        let clause = conditions.build()?;
        let order = if options.order.is_empty() {
            format!("{} ASC", T::PRIMARY_KEY)
        } else {
            options.order.join(", ")
        };

        let mut sql = format!(
            "SELECT * FROM {} WHERE {} ORDER BY {order}",
            T::TABLE,
            clause.sql
        );
        let limit = options.limit.filter(|l| *l > 0);
        let offset = options.offset.filter(|o| *o > 0);
        match (limit, offset) {
            (Some(limit), _) => sql.push_str(&format!(" LIMIT {limit}")),
            // SQLite only accepts OFFSET after a LIMIT.
            (None, Some(_)) => sql.push_str(" LIMIT -1"),
            (None, None) => {}
        }
        if let Some(offset) = offset {
            sql.push_str(&format!(" OFFSET {offset}"));
        }

        self.db.query(&sql, &clause.binds)
    }

    /// First matching row under `order` (primary key ascending when empty).
    pub fn get_row(&self, conditions: &Conditions, order: &[&str]) -> QueryResult<Option<Row>> {
        let options = SelectOptions {
            order: order.iter().map(|o| o.to_string()).collect(),
            limit: Some(1),
            offset: None,
        };
        Ok(self.get_rows(conditions, &options)?.into_iter().next())
    }

    pub fn get_count(&self, conditions: &Conditions) -> QueryResult<i64> {
        let (sql, binds) = if conditions.is_empty() {
            (format!("SELECT COUNT(*) AS cnt FROM {}", T::TABLE), Binds::new())
        } else {
            let clause = conditions.build()?;
            (
                format!("SELECT COUNT(*) AS cnt FROM {} WHERE {}", T::TABLE, clause.sql),
                clause.binds,
            )
        };

        let row = self.db.query_one(&sql, &binds)?;
        row.as_ref()
            .and_then(|row| row.get("cnt"))
            .and_then(Scalar::as_i64)
            .ok_or_else(|| QueryError::UnexpectedResult {
                message: format!("count query on {} returned no cnt column", T::TABLE),
            })
    }

    /// Insert or update. A row whose primary key is missing or unset is
    /// inserted and comes back carrying the generated id; otherwise the
    /// row with that id is updated.
    pub fn save(&self, mut row: Row) -> QueryResult<Row> {
        let pk = T::PRIMARY_KEY;
        match row.remove(pk).filter(|id| !id.is_unset()) {
            None => {
                self.insert_row(&row)?;
                let id = self.db.last_inserted_id();
                let id = id.parse::<i64>().map_or(Scalar::Text(id), Scalar::Int);
                row.set(pk, id);
            }
            Some(id) => {
                self.update_row(&id, &row)?;
                row.set(pk, id);
            }
        }
        Ok(row)
    }

    pub fn delete(&self, id: impl Into<Scalar>) -> QueryResult<()> {
        let id: Scalar = id.into();
        let sql = format!("DELETE FROM {} WHERE {} = :pk", T::TABLE, T::PRIMARY_KEY);
        self.db.execute(&sql, &binds! { "pk" => id })
    }

    fn insert_row(&self, row: &Row) -> QueryResult<()> {
        if row.is_empty() {
            let sql = format!("INSERT INTO {} DEFAULT VALUES", T::TABLE);
            return self.db.execute(&sql, &Binds::new());
        }

        let columns: Vec<&str> = row.columns().collect();
        let placeholders: Vec<String> = columns.iter().map(|c| format!(":{c}")).collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            T::TABLE,
            columns.join(", "),
            placeholders.join(", ")
        );
        self.db.execute(&sql, &row_binds(row))
    }

    fn update_row(&self, id: &Scalar, row: &Row) -> QueryResult<()> {
        if row.is_empty() {
            return Ok(());
        }

        let assignments: Vec<String> = row.columns().map(|c| format!("{c} = :{c}")).collect();
        let sql = format!(
            "UPDATE {} SET {} WHERE {pk} = :{pk}",
            T::TABLE,
            assignments.join(", "),
            pk = T::PRIMARY_KEY
        );
        let mut binds = row_binds(row);
        binds.insert(T::PRIMARY_KEY, id.clone());
        self.db.execute(&sql, &binds)
    }
}

fn row_binds(row: &Row) -> Binds {
    row.iter().map(|(column, value)| (column, value.clone())).collect()
}
