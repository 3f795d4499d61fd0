//! SELECT renderer.

use super::StatementBuilder;
use super::clause::render_conditions;

impl StatementBuilder {
    /// Build the SELECT SQL.
    pub(super) fn build_select(&self) -> String {
        let sep = self.separator();

        let mut sql = String::from("SELECT ");
        if self.fields.is_empty() {
            sql.push('*');
        } else {
            sql.push_str(&self.fields.join(", "));
        }
        sql.push_str(sep);

        sql.push_str(" FROM ");
        sql.push_str(&self.from_tables.join(", "));
        sql.push_str(sep);

        // JOINs
        for join in &self.joins {
            sql.push(' ');
            sql.push_str(&join.to_string());
            sql.push(' ');
            sql.push_str(sep);
        }

        // WHERE
        sql.push_str(&self.where_clause());

        // GROUP BY / HAVING
        if !self.group_by.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&self.group_by.join(", "));

            if !self.having_conditions.is_empty() {
                sql.push_str(" HAVING ");
                sql.push_str(&render_conditions(&self.having_conditions, sep));
            }
        }

        // ORDER BY
        if !self.order_by.is_empty() {
            let terms: Vec<String> = self.order_by.iter().map(|t| t.to_string()).collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&terms.join(", "));
        }

        // LIMIT [start,] count
        match (self.limit, self.offset) {
            (Some(limit), None) if limit > 0 => {
                sql.push_str(&format!(" LIMIT {} ", limit));
            }
            (Some(limit), Some(offset)) if limit > 0 => {
                sql.push_str(&format!(" LIMIT {}, {}", offset, limit));
            }
            _ => {}
        }

        sql
    }
}
