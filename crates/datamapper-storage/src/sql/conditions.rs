//! WHERE clause construction from ordered conditions.
//!
//! Each `?` in a parameterized fragment becomes a named `:v_<n>` token,
//! with `n` drawn from one counter shared by the whole clause. Fragments
//! are parenthesized and joined with `AND` after a leading `1 = 1`, so a
//! clause built from no conditions is still valid SQL.

use datamapper_core::{BindValue, Binds, QueryError, QueryResult};

/// Always-true first term of every clause.
const SENTINEL: &str = "1 = 1";

/// One WHERE condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// SQL boolean expression used as-is, with no binds.
    Raw(String),
    /// Fragment with one `?` per value. A value may itself be a list,
    /// e.g. `group_id IN (?)` bound to `[1, 3]`.
    Param {
        fragment: String,
        values: Vec<BindValue>,
    },
}

/// Built clause: SQL without the `WHERE` keyword, plus its binds.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    pub sql: String,
    pub binds: Binds,
}

/// Ordered list of conditions, combined with `AND`.
///
/// ```
/// use datamapper_core::BindValue;
/// use datamapper_storage::Conditions;
///
/// let clause = Conditions::new()
///     .param("group_id IN (?)", vec![1, 3])
///     .params("group_id >= ? OR email = ?", [BindValue::from(5), BindValue::from("a@b.c")])
///     .raw("deleted_at IS NULL")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     clause.sql,
///     "1 = 1 AND (group_id IN (:v_0)) AND (group_id >= :v_1 OR email = :v_2) AND (deleted_at IS NULL)"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conditions {
    items: Vec<Condition>,
}

impl Conditions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(mut self, sql: impl Into<String>) -> Self {
        self.items.push(Condition::Raw(sql.into()));
        self
    }

    /// Fragment with exactly one `?`.
    pub fn param(mut self, fragment: impl Into<String>, value: impl Into<BindValue>) -> Self {
        self.items.push(Condition::Param {
            fragment: fragment.into(),
            values: vec![value.into()],
        });
        self
    }

    /// Fragment with one `?` per value, bound left to right.
    pub fn params(
        mut self,
        fragment: impl Into<String>,
        values: impl IntoIterator<Item = BindValue>,
    ) -> Self {
        self.items.push(Condition::Param {
            fragment: fragment.into(),
            values: values.into_iter().collect(),
        });
        self
    }

    pub fn push(&mut self, condition: Condition) {
        self.items.push(condition);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn as_slice(&self) -> &[Condition] {
        &self.items
    }

    pub fn build(&self) -> QueryResult<WhereClause> {
        build_where(&self.items)
    }
}

impl FromIterator<Condition> for Conditions {
    fn from_iter<I: IntoIterator<Item = Condition>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Build an `AND`-joined clause from `conditions`, in order.
///
/// Fails with [`QueryError::PlaceholderArity`] when a fragment's `?` count
/// differs from the number of values supplied for it.
pub fn build_where(conditions: &[Condition]) -> QueryResult<WhereClause> {
    let mut parts = Vec::with_capacity(conditions.len() + 1);
    parts.push(SENTINEL.to_string());
    let mut binds = Binds::new();
    let mut next_index = 0usize;

    for condition in conditions {
        let expr = match condition {
            Condition::Raw(sql) => sql.clone(),
            Condition::Param { fragment, values } => {
                bind_fragment(fragment, values, &mut next_index, &mut binds)?
            }
        };
        parts.push(format!("({expr})"));
    }

    Ok(WhereClause {
        sql: parts.join(" AND "),
        binds,
    })
}

/// Substitute each `?` in `fragment` with the next `:v_<n>` token and bind
/// the matching value.
fn bind_fragment(
    fragment: &str,
    values: &[BindValue],
    next_index: &mut usize,
    binds: &mut Binds,
) -> QueryResult<String> {
    let placeholders = fragment.matches('?').count();
    if placeholders != values.len() {
        return Err(QueryError::PlaceholderArity {
            fragment: fragment.to_string(),
            placeholders,
            values: values.len(),
        });
    }

    let mut values = values.iter();
    let mut expr = String::with_capacity(fragment.len() + placeholders * 4);
    for c in fragment.chars() {
        if c != '?' {
            expr.push(c);
            continue;
        }
        if let Some(value) = values.next() {
            let key = format!("v_{next_index}");
            expr.push(':');
            expr.push_str(&key);
            binds.insert(key, value.clone());
            *next_index += 1;
        }
    }
    Ok(expr)
}
