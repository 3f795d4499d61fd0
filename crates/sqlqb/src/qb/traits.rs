//! Trait definitions for statement builders.

use super::StatementBuilder;
use crate::error::{QbError, QbResult};

/// Base trait for anything that renders to SQL text.
pub trait SqlQb {
    /// Build the SQL string.
    fn build_sql(&self) -> String;

    /// Debug helper to get the SQL string.
    fn to_sql(&self) -> String {
        self.build_sql()
    }

    /// Validate builder state before rendering.
    fn validate(&self) -> QbResult<()> {
        Ok(())
    }
}

impl SqlQb for StatementBuilder {
    fn build_sql(&self) -> String {
        self.build()
    }

    fn validate(&self) -> QbResult<()> {
        if self.operand().is_none() {
            return Err(QbError::Unconfigured);
        }
        Ok(())
    }
}
