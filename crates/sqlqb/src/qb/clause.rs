//! Clause value types shared by the renderers.

use crate::error::QbError;
use std::fmt;
use std::str::FromStr;

/// Boolean keyword joining two conditions in a WHERE/HAVING list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Connector {
    #[default]
    And,
    Or,
}

impl Connector {
    /// SQL keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }

    /// Keyword padded to a fixed width of 3.
    fn token(&self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR ",
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Connector {
    type Err = QbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" => Ok(Connector::And),
            "OR" => Ok(Connector::Or),
            _ => Err(QbError::invalid_argument(format!(
                "unknown connector '{}', expected AND or OR",
                s.trim()
            ))),
        }
    }
}

/// A single `lhs op rhs` condition with its leading connector.
///
/// All three parts are rendered verbatim: no quoting, no escaping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Condition {
    pub connector: Connector,
    pub lhs: String,
    pub op: String,
    pub rhs: String,
}

impl Condition {
    pub fn new(connector: Connector, lhs: &str, op: &str, rhs: impl fmt::Display) -> Self {
        Self {
            connector,
            lhs: lhs.to_string(),
            op: op.to_string(),
            rhs: rhs.to_string(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}

/// Render a WHERE/HAVING condition list.
///
/// Each condition renders as ` {connector} {lhs} {op} {rhs}` followed by
/// `sep`. The first condition drops its 4-byte ` AND`/` OR ` prefix but keeps
/// the space before `lhs`, so the list always starts with a single space.
/// An empty list renders as "".
pub(crate) fn render_conditions(conditions: &[Condition], sep: &str) -> String {
    let mut out = String::new();
    for (i, cond) in conditions.iter().enumerate() {
        if i > 0 {
            out.push(' ');
            out.push_str(cond.connector.token());
        }
        out.push(' ');
        out.push_str(&cond.to_string());
        out.push_str(sep);
    }
    out
}

/// JOIN flavour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum JoinKind {
    #[default]
    Inner,
    Left,
    Right,
    Outer,
}

impl JoinKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER",
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
            JoinKind::Outer => "OUTER",
        }
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JoinKind {
    type Err = QbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INNER" => Ok(JoinKind::Inner),
            "LEFT" => Ok(JoinKind::Left),
            "RIGHT" => Ok(JoinKind::Right),
            "OUTER" => Ok(JoinKind::Outer),
            _ => Err(QbError::invalid_argument(format!(
                "unknown join kind '{}', expected INNER, LEFT, RIGHT or OUTER",
                s.trim()
            ))),
        }
    }
}

/// A JOIN clause: `{KIND} JOIN {table} ON {lhs} {op} {rhs}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Join {
    pub kind: JoinKind,
    pub table: String,
    pub lhs: String,
    pub op: String,
    pub rhs: String,
}

impl Join {
    pub fn new(kind: JoinKind, table: &str, lhs: &str, op: &str, rhs: impl fmt::Display) -> Self {
        Self {
            kind,
            table: table.to_string(),
            lhs: lhs.to_string(),
            op: op.to_string(),
            rhs: rhs.to_string(),
        }
    }
}

impl fmt::Display for Join {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} JOIN {} ON {} {} {}",
            self.kind, self.table, self.lhs, self.op, self.rhs
        )
    }
}

/// ORDER BY direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = QbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(Direction::Asc),
            "DESC" => Ok(Direction::Desc),
            _ => Err(QbError::invalid_argument(format!(
                "unknown order direction '{}', expected ASC or DESC",
                s.trim()
            ))),
        }
    }
}

/// One ORDER BY entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderTerm {
    pub field: String,
    pub direction: Direction,
}

impl OrderTerm {
    pub fn new(field: &str, direction: Direction) -> Self {
        Self {
            field: field.to_string(),
            direction,
        }
    }
}

impl fmt::Display for OrderTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cond(connector: Connector, lhs: &str, rhs: i32) -> Condition {
        Condition::new(connector, lhs, "=", rhs)
    }

    #[test]
    fn test_render_conditions_empty() {
        assert_eq!(render_conditions(&[], " "), "");
        assert_eq!(render_conditions(&[], "\n "), "");
    }

    #[test]
    fn test_render_conditions_skips_first_connector() {
        let and_first = [cond(Connector::And, "a", 1)];
        let or_first = [cond(Connector::Or, "a", 1)];
        assert_eq!(render_conditions(&and_first, " "), " a = 1 ");
        assert_eq!(render_conditions(&or_first, " "), " a = 1 ");
        assert_eq!(render_conditions(&or_first, "\n "), " a = 1\n ");
    }

    #[test]
    fn test_render_conditions_fixed_width_connectors() {
        let conds = [
            cond(Connector::And, "a", 1),
            cond(Connector::Or, "b", 2),
            cond(Connector::And, "c", 3),
        ];
        assert_eq!(
            render_conditions(&conds, " "),
            " a = 1  OR  b = 2  AND c = 3 "
        );
    }

    #[test]
    fn test_render_conditions_pretty_separator() {
        let conds = [cond(Connector::And, "a", 1), cond(Connector::And, "b", 2)];
        assert_eq!(render_conditions(&conds, "\n "), " a = 1\n  AND b = 2\n ");
    }

    #[test]
    fn test_join_display() {
        let join = Join::new(JoinKind::Left, "roles r", "r.id", "=", "u.role_id");
        assert_eq!(join.to_string(), "LEFT JOIN roles r ON r.id = u.role_id");
    }

    #[test]
    fn test_order_term_display() {
        assert_eq!(OrderTerm::new("id", Direction::Desc).to_string(), "id DESC");
        assert_eq!(OrderTerm::new("name", Direction::default()).to_string(), "name ASC");
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("or".parse::<Connector>(), Ok(Connector::Or));
        assert_eq!(" Outer ".parse::<JoinKind>(), Ok(JoinKind::Outer));
        assert_eq!("desc".parse::<Direction>(), Ok(Direction::Desc));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "xor".parse::<Connector>().unwrap_err();
        assert!(matches!(err, QbError::InvalidArgument(_)));
        assert!("cross".parse::<JoinKind>().is_err());
        assert!("up".parse::<Direction>().is_err());
    }
}
