//! Statement files replayed through the public API.

use sqlqb::{QbError, StatementBuilder, StatementFile};

#[test]
fn file_matches_fluent_calls() {
    let file = StatementFile::from_toml_str(
        r#"
[[statement]]
name = "report"
kind = "select"
tables = ["orders o", "customers c"]
fields = ["c.name", "SUM(o.total)"]
group_by = ["c.name"]
limit = 5

[[statement.where]]
lhs = "o.customer_id"
op = "="
rhs = "c.id"

[[statement.having]]
lhs = "SUM(o.total)"
op = ">"
rhs = 1000

[[statement.order]]
field = "c.name"
"#,
    )
    .unwrap();

    let from_file = file.find("report").unwrap().to_builder(false).unwrap();
    let fluent = StatementBuilder::new()
        .select("orders o")
        .select("customers c")
        .fields(["c.name", "SUM(o.total)"])
        .and_where("o.customer_id", "=", "c.id")
        .group_by("c.name")
        .and_having("SUM(o.total)", ">", 1000)
        .order("c.name")
        .limit(5);

    assert_eq!(from_file.build(), fluent.build());
}

#[test]
fn file_level_pretty_applies_unless_overridden() {
    let file = StatementFile::from_toml_str(
        r#"
pretty = true

[[statement]]
kind = "delete"
tables = ["a"]

[[statement]]
kind = "delete"
pretty = false
tables = ["b"]
"#,
    )
    .unwrap();

    let builders = file.builders().unwrap();
    assert!(builders[0].is_pretty());
    assert!(!builders[1].is_pretty());
}

#[test]
fn bad_direction_is_invalid_argument() {
    let file = StatementFile::from_toml_str(
        r#"
[[statement]]
kind = "select"
tables = ["t"]

[[statement.order]]
field = "id"
direction = "sideways"
"#,
    )
    .unwrap();

    match file.builders() {
        Err(QbError::InvalidArgument(msg)) => assert!(msg.contains("sideways")),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}
