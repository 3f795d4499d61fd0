//! Statement builder.
//!
//! Clauses are accumulated in call order on a [`StatementBuilder`] and
//! rendered into a single SQL string by [`StatementBuilder::build`]. The
//! renderer is picked by the last terminal call (`select`, `insert` or
//! `delete`).
//!
//! # Usage
//!
//! ```
//! use sqlqb::qb;
//!
//! let sql = qb::select("users")
//!     .fields(["id", "name"])
//!     .and_where("id", ">", 10)
//!     .build();
//! assert_eq!(sql, "SELECT id, name  FROM users  WHERE  id > 10 ");
//!
//! let sql = qb::insert("users")
//!     .fields(["id", "name"])
//!     .value("1, 'alice'")
//!     .build();
//! assert_eq!(sql, "INSERT INTO users (id, name) VALUES (1, 'alice')");
//! ```
//!
//! Nothing is quoted or escaped. Identifiers, operators and right-hand
//! sides are written into the output exactly as given.

mod clause;
mod delete;
mod insert;
mod select;
mod trace;
mod traits;

pub use clause::{Condition, Connector, Direction, Join, JoinKind, OrderTerm};
pub use traits::SqlQb;

use crate::error::{QbError, QbResult};
use std::fmt;

const PLAIN_SEPARATOR: &str = " ";
const PRETTY_SEPARATOR: &str = "\n ";

/// Statement kind, chosen by the last terminal call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Select,
    Insert,
    Delete,
}

impl Operand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operand::Select => "SELECT",
            Operand::Insert => "INSERT",
            Operand::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Operand {
    type Err = QbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SELECT" => Ok(Operand::Select),
            "INSERT" => Ok(Operand::Insert),
            "DELETE" => Ok(Operand::Delete),
            _ => Err(QbError::invalid_argument(format!(
                "unknown statement kind '{}', expected SELECT, INSERT or DELETE",
                s.trim()
            ))),
        }
    }
}

/// Fluent builder for SELECT / INSERT / DELETE statements.
///
/// Switching the operand (e.g. `select` then `delete`) keeps every clause
/// accumulated so far; the renderer for the final operand simply ignores
/// the clauses it does not use.
#[derive(Clone, Debug, Default)]
pub struct StatementBuilder {
    /// Renderer selector (None until a terminal call)
    operand: Option<Operand>,
    /// Newline-separated clauses
    pretty_print: bool,
    /// SELECT source tables
    from_tables: Vec<String>,
    /// INSERT/DELETE target table
    target_table: String,
    /// Column expressions
    fields: Vec<String>,
    /// WHERE conditions
    where_conditions: Vec<Condition>,
    /// HAVING conditions
    having_conditions: Vec<Condition>,
    /// JOIN clauses
    joins: Vec<Join>,
    /// GROUP BY expressions
    group_by: Vec<String>,
    /// ORDER BY terms
    order_by: Vec<OrderTerm>,
    /// LIMIT
    limit: Option<u64>,
    /// Start row of the LIMIT range
    offset: Option<u64>,
    /// Parenthesized INSERT value tuples
    values: Vec<String>,
}

impl StatementBuilder {
    /// Create a builder that separates clauses with a single space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder that separates clauses with a newline and a space.
    pub fn pretty() -> Self {
        Self::with_pretty(true)
    }

    /// Create a builder with an explicit pretty-print flag.
    pub fn with_pretty(pretty_print: bool) -> Self {
        Self {
            pretty_print,
            ..Self::default()
        }
    }

    // ==================== Terminal operations ====================

    /// Add a source table and render as SELECT.
    ///
    /// Repeated calls accumulate tables (comma-joined in FROM).
    pub fn select(mut self, table: &str) -> Self {
        self.from_tables.push(table.to_string());
        self.operand = Some(Operand::Select);
        self
    }

    /// Set the target table and render as INSERT.
    pub fn insert(mut self, table: &str) -> Self {
        self.target_table = table.to_string();
        self.operand = Some(Operand::Insert);
        self
    }

    /// Set the target table and render as DELETE.
    pub fn delete(mut self, table: &str) -> Self {
        self.target_table = table.to_string();
        self.operand = Some(Operand::Delete);
        self
    }

    // ==================== Fields ====================

    /// Append one column expression.
    pub fn field(mut self, name: &str) -> Self {
        self.fields.push(name.to_string());
        self
    }

    /// Append several column expressions, in order.
    pub fn fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.fields
            .extend(names.into_iter().map(|n| n.as_ref().to_string()));
        self
    }

    // ==================== WHERE ====================

    /// Add WHERE: `AND lhs op rhs`
    pub fn and_where(mut self, lhs: &str, op: &str, rhs: impl fmt::Display) -> Self {
        self.where_conditions
            .push(Condition::new(Connector::And, lhs, op, rhs));
        self
    }

    /// Add WHERE: `OR lhs op rhs`
    pub fn or_where(mut self, lhs: &str, op: &str, rhs: impl fmt::Display) -> Self {
        self.where_conditions
            .push(Condition::new(Connector::Or, lhs, op, rhs));
        self
    }

    // ==================== JOIN ====================

    /// Add INNER JOIN.
    pub fn join(self, table: &str, lhs: &str, op: &str, rhs: impl fmt::Display) -> Self {
        self.push_join(JoinKind::Inner, table, lhs, op, rhs)
    }

    /// Add LEFT JOIN.
    pub fn left_join(self, table: &str, lhs: &str, op: &str, rhs: impl fmt::Display) -> Self {
        self.push_join(JoinKind::Left, table, lhs, op, rhs)
    }

    /// Add RIGHT JOIN.
    pub fn right_join(self, table: &str, lhs: &str, op: &str, rhs: impl fmt::Display) -> Self {
        self.push_join(JoinKind::Right, table, lhs, op, rhs)
    }

    /// Add OUTER JOIN.
    pub fn outer_join(self, table: &str, lhs: &str, op: &str, rhs: impl fmt::Display) -> Self {
        self.push_join(JoinKind::Outer, table, lhs, op, rhs)
    }

    /// Add a JOIN of the given kind.
    pub fn push_join(
        mut self,
        kind: JoinKind,
        table: &str,
        lhs: &str,
        op: &str,
        rhs: impl fmt::Display,
    ) -> Self {
        self.joins.push(Join::new(kind, table, lhs, op, rhs));
        self
    }

    // ==================== Grouping ====================

    /// Append a GROUP BY expression.
    pub fn group_by(mut self, field: &str) -> Self {
        self.group_by.push(field.to_string());
        self
    }

    /// Add HAVING: `AND lhs op rhs` (rendered only with GROUP BY)
    pub fn and_having(mut self, lhs: &str, op: &str, rhs: impl fmt::Display) -> Self {
        self.having_conditions
            .push(Condition::new(Connector::And, lhs, op, rhs));
        self
    }

    /// Add HAVING: `OR lhs op rhs` (rendered only with GROUP BY)
    pub fn or_having(mut self, lhs: &str, op: &str, rhs: impl fmt::Display) -> Self {
        self.having_conditions
            .push(Condition::new(Connector::Or, lhs, op, rhs));
        self
    }

    // ==================== Ordering ====================

    /// Add ORDER BY field ASC.
    pub fn order(self, field: &str) -> Self {
        self.order_by(field, Direction::Asc)
    }

    /// Add ORDER BY field DESC.
    pub fn order_desc(self, field: &str) -> Self {
        self.order_by(field, Direction::Desc)
    }

    /// Add ORDER BY with an explicit direction.
    pub fn order_by(mut self, field: &str, direction: Direction) -> Self {
        self.order_by.push(OrderTerm::new(field, direction));
        self
    }

    // ==================== Pagination ====================

    /// Set LIMIT. Zero disables pagination.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Set the first row of the LIMIT range (`LIMIT start, count`).
    pub fn range_start(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    // ==================== Values ====================

    /// Append an INSERT value tuple.
    ///
    /// The input is trimmed and wrapped in parentheses where missing. The
    /// contents are taken as already formatted SQL, e.g. `"1, 'x'"`.
    pub fn value(mut self, tuple: &str) -> Self {
        self.values.push(normalize_tuple(tuple));
        self
    }

    /// Append several INSERT value tuples, in order.
    pub fn values<I, S>(mut self, tuples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.values
            .extend(tuples.into_iter().map(|t| normalize_tuple(t.as_ref())));
        self
    }

    // ==================== Build ====================

    /// Render the statement. Returns "" while no operand is chosen.
    pub fn build(&self) -> String {
        let Some(operand) = self.operand else {
            trace::unconfigured();
            return String::new();
        };
        let sql = match operand {
            Operand::Select => self.build_select(),
            Operand::Insert => self.build_insert(),
            Operand::Delete => self.build_delete(),
        };
        trace::rendered(operand, &sql);
        sql
    }

    /// Render the statement, failing if no operand is chosen.
    pub fn try_build(&self) -> QbResult<String> {
        self.validate()?;
        Ok(self.build())
    }

    // ==================== Accessors ====================

    pub fn operand(&self) -> Option<Operand> {
        self.operand
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty_print
    }

    /// Clause separator: `" "` or `"\n "` in pretty mode.
    pub fn separator(&self) -> &'static str {
        if self.pretty_print {
            PRETTY_SEPARATOR
        } else {
            PLAIN_SEPARATOR
        }
    }

    pub fn from_tables(&self) -> &[String] {
        &self.from_tables
    }

    pub fn target_table(&self) -> &str {
        &self.target_table
    }

    pub fn field_list(&self) -> &[String] {
        &self.fields
    }

    pub fn where_conditions(&self) -> &[Condition] {
        &self.where_conditions
    }

    pub fn having_conditions(&self) -> &[Condition] {
        &self.having_conditions
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    pub fn group_by_fields(&self) -> &[String] {
        &self.group_by
    }

    pub fn order_terms(&self) -> &[OrderTerm] {
        &self.order_by
    }

    pub fn limit_value(&self) -> Option<u64> {
        self.limit
    }

    pub fn offset_value(&self) -> Option<u64> {
        self.offset
    }

    pub fn value_list(&self) -> &[String] {
        &self.values
    }

    /// ` WHERE ` + conditions, or "" without conditions.
    fn where_clause(&self) -> String {
        if self.where_conditions.is_empty() {
            return String::new();
        }
        let mut sql = String::from(" WHERE ");
        sql.push_str(&clause::render_conditions(
            &self.where_conditions,
            self.separator(),
        ));
        sql
    }
}

impl fmt::Display for StatementBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

fn normalize_tuple(tuple: &str) -> String {
    let trimmed = tuple.trim();
    let mut out = String::with_capacity(trimmed.len() + 2);
    if !trimmed.starts_with('(') {
        out.push('(');
    }
    out.push_str(trimmed);
    if !trimmed.ends_with(')') {
        out.push(')');
    }
    out
}

/// Create a plain-mode SELECT builder for the given table.
///
/// # Example
/// ```
/// let qb = sqlqb::qb::select("users").field("id");
/// assert_eq!(qb.build(), "SELECT id  FROM users ");
/// ```
pub fn select(table: &str) -> StatementBuilder {
    StatementBuilder::new().select(table)
}

/// Create a plain-mode INSERT builder for the given table.
pub fn insert(table: &str) -> StatementBuilder {
    StatementBuilder::new().insert(table)
}

/// Create a plain-mode DELETE builder for the given table.
pub fn delete(table: &str) -> StatementBuilder {
    StatementBuilder::new().delete(table)
}
