//! Example demonstrating the statement builder in plain and pretty mode.
//!
//! Run with:
//!   cargo run --example basic -p sqlqb

use sqlqb::StatementBuilder;

fn main() {
    let select = StatementBuilder::pretty()
        .select("table_a")
        .fields(["field_a", "field_b"])
        .and_where("field_a", "=", 10)
        .join("other_table", "other_table.field_a", "=", "table_a.field_a");
    println!("{select}");
    println!();

    let insert = StatementBuilder::new()
        .insert("table_a")
        .fields(["field_a", "field_b"])
        .value("1, 'one'")
        .value("(2, 'two')");
    println!("{insert}");
    println!();

    let delete = StatementBuilder::new()
        .delete("table_a")
        .and_where("field_a", "<", 0)
        .or_where("field_b", "IS", "NULL");
    println!("{delete}");
}
