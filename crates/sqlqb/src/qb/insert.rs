//! INSERT renderer.

use super::StatementBuilder;

impl StatementBuilder {
    /// Build the INSERT SQL.
    pub(super) fn build_insert(&self) -> String {
        let sep = self.separator();

        let mut sql = format!("INSERT INTO {} ", self.target_table);

        if !self.fields.is_empty() {
            sql.push('(');
            sql.push_str(&self.fields.join(", "));
            sql.push(')');
        }

        sql.push_str(sep);
        sql.push_str("VALUES");
        sql.push_str(sep);

        // Pretty mode puts each tuple on its own line.
        if self.pretty_print {
            let tuple_sep = format!(", {}", sep);
            sql.push_str(&self.values.join(tuple_sep.as_str()));
        } else {
            sql.push_str(&self.values.join(", "));
        }

        sql
    }
}
