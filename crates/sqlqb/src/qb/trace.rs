//! `tracing` events for rendered SQL.
//!
//! Enabled with the crate feature `tracing`; otherwise every hook here
//! compiles to nothing.

use super::Operand;

/// Longest SQL (in bytes) emitted in a single event.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
const MAX_SQL_LENGTH: usize = 200;

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
fn truncate_sql(sql: &str) -> String {
    if sql.len() > MAX_SQL_LENGTH {
        format!("{}...", truncate_sql_bytes(sql, MAX_SQL_LENGTH))
    } else {
        sql.to_string()
    }
}

#[cfg(feature = "tracing")]
pub(super) fn rendered(operand: Operand, sql: &str) {
    tracing::debug!(
        target: "sqlqb.sql",
        operand = operand.as_str(),
        sql = %truncate_sql(sql),
        "statement rendered"
    );
}

#[cfg(not(feature = "tracing"))]
pub(super) fn rendered(_operand: Operand, _sql: &str) {}

#[cfg(feature = "tracing")]
pub(super) fn unconfigured() {
    tracing::trace!(target: "sqlqb.sql", "build() called without an operand, rendering nothing");
}

#[cfg(not(feature = "tracing"))]
pub(super) fn unconfigured() {}
