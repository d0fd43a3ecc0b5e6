//! List-bind expansion.
//!
//! Prepared-statement drivers bind one value per placeholder, so a list
//! bound to `:ids` is rewritten into `:in_ids_0,:in_ids_1,...` with one
//! scalar bind per element. Only placeholder text is substituted, never
//! values.

use datamapper_core::{BindValue, Binds, Scalar};
use serde::Serialize;

/// SQL and scalar binds ready for the driver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedStatement {
    pub sql: String,
    pub binds: Vec<(String, Scalar)>,
}

/// Expand every list bind into indexed scalar binds.
///
/// Scalars are copied through under their own key. A list at key `k`
/// becomes keys `in_k_0 .. in_k_{n-1}` and every `:k` token in the SQL is
/// replaced by the comma-joined new tokens. An empty list leaves an empty
/// `IN ()`; guarding against that is the caller's job.
pub fn normalize(sql: &str, binds: &Binds) -> NormalizedStatement {
    let mut sql = sql.to_string();
    let mut out = Vec::with_capacity(binds.len());

    for (key, value) in binds.iter() {
        match value {
            BindValue::Scalar(v) => out.push((key.to_string(), v.clone())),
            BindValue::List(items) => {
                let mut tokens = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    let expanded = format!("in_{key}_{i}");
                    tokens.push(format!(":{expanded}"));
                    out.push((expanded, item.clone()));
                }
                sql = replace_placeholder(&sql, key, &tokens.join(","));
            }
        }
    }

    NormalizedStatement { sql, binds: out }
}

/// Replace every `:key` token whose name ends at an identifier boundary.
/// `:ids` matches in `IN (:ids)` but not in `:ids_extra`.
pub(crate) fn replace_placeholder(sql: &str, key: &str, replacement: &str) -> String {
    let token = format!(":{key}");
    let mut out = String::with_capacity(sql.len() + replacement.len());
    let mut last = 0;

    for (pos, _) in sql.match_indices(&token) {
        let end = pos + token.len();
        if sql[end..].chars().next().is_some_and(is_ident_char) {
            continue;
        }
        out.push_str(&sql[last..pos]);
        out.push_str(replacement);
        last = end;
    }
    out.push_str(&sql[last..]);
    out
}

pub(crate) fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
