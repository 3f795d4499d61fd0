//! Statement descriptions decoded from TOML.
//!
//! A statement file lists `[[statement]]` tables; each one is replayed onto
//! a [`StatementBuilder`] in document order by [`StatementDef::to_builder`].
//!
//! ```toml
//! pretty = false
//!
//! [[statement]]
//! name = "active_users"
//! kind = "select"
//! tables = ["users"]
//! fields = ["id", "name"]
//! limit = 10
//!
//! [[statement.where]]
//! lhs = "active"
//! op = "="
//! rhs = true
//! ```

use crate::error::{QbError, QbResult};
use crate::qb::{Connector, Direction, JoinKind, Operand, StatementBuilder};
use serde::Deserialize;
use std::fmt;

/// Top-level statement file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatementFile {
    /// Default pretty-print flag for every statement
    #[serde(default)]
    pub pretty: bool,

    #[serde(default, rename = "statement")]
    pub statements: Vec<StatementDef>,
}

impl StatementFile {
    /// Decode a statement file.
    pub fn from_toml_str(raw: &str) -> QbResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Find a statement by its `name`.
    pub fn find(&self, name: &str) -> Option<&StatementDef> {
        self.statements
            .iter()
            .find(|s| s.name.as_deref() == Some(name))
    }

    /// Replay every statement, in file order.
    pub fn builders(&self) -> QbResult<Vec<StatementBuilder>> {
        self.statements
            .iter()
            .map(|s| s.to_builder(self.pretty))
            .collect()
    }
}

/// One `[[statement]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct StatementDef {
    pub name: Option<String>,
    /// select | insert | delete
    pub kind: String,
    /// Overrides the file-level flag
    pub pretty: Option<bool>,

    /// Source tables for `select`; `insert` and `delete` take exactly one
    #[serde(default)]
    pub tables: Vec<String>,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default, rename = "join")]
    pub joins: Vec<JoinDef>,
    #[serde(default, rename = "where")]
    pub where_conditions: Vec<ConditionDef>,
    #[serde(default)]
    pub group_by: Vec<String>,
    #[serde(default)]
    pub having: Vec<ConditionDef>,
    #[serde(default)]
    pub order: Vec<OrderDef>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    #[serde(default)]
    pub values: Vec<String>,
}

impl StatementDef {
    /// Build a [`StatementBuilder`] from this description.
    ///
    /// `default_pretty` applies unless the statement sets `pretty` itself.
    pub fn to_builder(&self, default_pretty: bool) -> QbResult<StatementBuilder> {
        let operand: Operand = self.kind.parse()?;
        let Some(first_table) = self.tables.first() else {
            return Err(QbError::invalid_argument(format!(
                "statement '{}' has no tables",
                self.label()
            )));
        };

        if operand != Operand::Select && self.tables.len() > 1 {
            return Err(QbError::invalid_argument(format!(
                "statement '{}' is {} but lists {} tables, expected one",
                self.label(),
                operand,
                self.tables.len()
            )));
        }

        let mut qb = StatementBuilder::with_pretty(self.pretty.unwrap_or(default_pretty));
        qb = match operand {
            Operand::Select => self.tables.iter().fold(qb, |qb, t| qb.select(t)),
            Operand::Insert => qb.insert(first_table),
            Operand::Delete => qb.delete(first_table),
        };

        qb = qb.fields(&self.fields);

        for join in &self.joins {
            let kind = parse_or_default::<JoinKind>(join.kind.as_deref())?;
            qb = qb.push_join(kind, &join.table, &join.lhs, &join.op, &join.rhs);
        }

        for cond in &self.where_conditions {
            qb = match parse_or_default::<Connector>(cond.connector.as_deref())? {
                Connector::And => qb.and_where(&cond.lhs, &cond.op, &cond.rhs),
                Connector::Or => qb.or_where(&cond.lhs, &cond.op, &cond.rhs),
            };
        }

        for field in &self.group_by {
            qb = qb.group_by(field);
        }

        for cond in &self.having {
            qb = match parse_or_default::<Connector>(cond.connector.as_deref())? {
                Connector::And => qb.and_having(&cond.lhs, &cond.op, &cond.rhs),
                Connector::Or => qb.or_having(&cond.lhs, &cond.op, &cond.rhs),
            };
        }

        for term in &self.order {
            let direction = parse_or_default::<Direction>(term.direction.as_deref())?;
            qb = qb.order_by(&term.field, direction);
        }

        if let Some(limit) = self.limit {
            qb = qb.limit(limit);
        }
        if let Some(offset) = self.offset {
            qb = qb.range_start(offset);
        }

        Ok(qb.values(&self.values))
    }

    /// Name used in messages.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

fn parse_or_default<T>(raw: Option<&str>) -> QbResult<T>
where
    T: std::str::FromStr<Err = QbError> + Default,
{
    match raw {
        Some(s) => s.parse(),
        None => Ok(T::default()),
    }
}

/// A WHERE/HAVING entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionDef {
    /// and | or (default and)
    pub connector: Option<String>,
    pub lhs: String,
    pub op: String,
    pub rhs: Scalar,
}

/// A JOIN entry.
#[derive(Debug, Clone, Deserialize)]
pub struct JoinDef {
    /// inner | left | right | outer (default inner)
    pub kind: Option<String>,
    pub table: String,
    pub lhs: String,
    pub op: String,
    pub rhs: Scalar,
}

/// An ORDER BY entry.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderDef {
    pub field: String,
    /// asc | desc (default asc)
    pub direction: Option<String>,
}

/// Right-hand side literal, written into the SQL verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => write!(f, "{}", v),
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Str(v) => f.write_str(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USERS: &str = r#"
pretty = false

[[statement]]
name = "active_users"
kind = "select"
tables = ["users"]
fields = ["id", "name"]
limit = 10
offset = 20

[[statement.join]]
kind = "left"
table = "roles"
lhs = "roles.id"
op = "="
rhs = "users.role_id"

[[statement.where]]
lhs = "active"
op = "="
rhs = true

[[statement.where]]
connector = "or"
lhs = "id"
op = "<"
rhs = 100

[[statement.order]]
field = "id"
direction = "desc"

[[statement]]
name = "add_users"
kind = "insert"
pretty = true
tables = ["users"]
fields = ["id", "name"]
values = ["1, 'alice'", "(2, 'bob')"]

[[statement]]
kind = "DELETE"
tables = ["sessions"]

[[statement.where]]
lhs = "expires_at"
op = "<"
rhs = "NOW()"
"#;

    #[test]
    fn test_decode_and_render() {
        let file = StatementFile::from_toml_str(USERS).unwrap();
        assert_eq!(file.statements.len(), 3);

        let sql: Vec<String> = file
            .builders()
            .unwrap()
            .iter()
            .map(|qb| qb.build())
            .collect();
        assert_eq!(
            sql[0],
            concat!(
                "SELECT id, name  FROM users ",
                " LEFT JOIN roles ON roles.id = users.role_id  ",
                " WHERE  active = true  OR  id < 100 ",
                " ORDER BY id DESC LIMIT 20, 10",
            )
        );
        assert_eq!(
            sql[1],
            "INSERT INTO users (id, name)\n VALUES\n (1, 'alice'), \n (2, 'bob')"
        );
        assert_eq!(sql[2], "DELETE FROM sessions WHERE  expires_at < NOW() ");
    }

    #[test]
    fn test_find_by_name() {
        let file = StatementFile::from_toml_str(USERS).unwrap();
        assert_eq!(file.find("add_users").unwrap().kind, "insert");
        assert!(file.find("missing").is_none());
        assert_eq!(file.statements[2].label(), "<unnamed>");
    }

    #[test]
    fn test_unknown_kind() {
        let file = StatementFile::from_toml_str(
            r#"
[[statement]]
kind = "update"
tables = ["t"]
"#,
        )
        .unwrap();
        let err = file.builders().unwrap_err();
        assert!(matches!(err, QbError::InvalidArgument(_)));
    }

    #[test]
    fn test_unknown_join_kind() {
        let file = StatementFile::from_toml_str(
            r#"
[[statement]]
kind = "select"
tables = ["t"]

[[statement.join]]
kind = "cross"
table = "u"
lhs = "u.id"
op = "="
rhs = "t.id"
"#,
        )
        .unwrap();
        assert!(file.builders().is_err());
    }

    #[test]
    fn test_missing_table() {
        let file = StatementFile::from_toml_str("[[statement]]\nkind = \"delete\"\n").unwrap();
        let err = file.statements[0].to_builder(false).unwrap_err();
        assert!(err.to_string().contains("has no tables"));
    }

    #[test]
    fn test_single_target_table() {
        let file = StatementFile::from_toml_str(
            r#"
[[statement]]
name = "purge"
kind = "delete"
tables = ["sessions", "tokens"]

[[statement]]
kind = "select"
tables = ["sessions", "tokens"]
"#,
        )
        .unwrap();
        let err = file.statements[0].to_builder(false).unwrap_err();
        assert!(matches!(err, QbError::InvalidArgument(_)));
        assert!(err.to_string().contains("'purge' is DELETE but lists 2 tables"));

        let qb = file.statements[1].to_builder(false).unwrap();
        assert_eq!(qb.build(), "SELECT *  FROM sessions, tokens ");
    }

    #[test]
    fn test_malformed_toml() {
        let err = StatementFile::from_toml_str("[[statement]\nkind = ").unwrap_err();
        assert!(matches!(err, QbError::Config(_)));
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::Int(5).to_string(), "5");
        assert_eq!(Scalar::Bool(false).to_string(), "false");
        assert_eq!(Scalar::Float(1.5).to_string(), "1.5");
        assert_eq!(Scalar::Str("'x'".into()).to_string(), "'x'");
    }
}
