//! DELETE renderer.

use super::StatementBuilder;

impl StatementBuilder {
    /// Build the DELETE SQL.
    ///
    /// Without conditions this deletes every row; nothing guards against it.
    pub(super) fn build_delete(&self) -> String {
        let mut sql = format!("DELETE FROM {}", self.target_table);
        sql.push_str(&self.where_clause());
        sql
    }
}
