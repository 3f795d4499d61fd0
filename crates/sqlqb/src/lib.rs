//! # sqlqb
//!
//! A fluent builder that assembles SELECT, INSERT and DELETE statements
//! as plain SQL text.
//!
//! ## Features
//!
//! - **Call-order rendering**: every clause is rendered in the order it was added
//! - **Deterministic output**: `build()` is a pure read of the accumulated state
//! - **Pretty mode**: clause boundaries become newlines for human-readable SQL
//! - **No magic**: nothing is quoted, escaped, bound or validated
//!
//! ```
//! use sqlqb::StatementBuilder;
//!
//! let sql = StatementBuilder::new()
//!     .select("users")
//!     .fields(["id", "name"])
//!     .left_join("roles", "roles.id", "=", "users.role_id")
//!     .and_where("users.active", "=", "true")
//!     .order_desc("id")
//!     .limit(10)
//!     .build();
//! assert!(sql.starts_with("SELECT id, name  FROM users "));
//! assert!(sql.ends_with(" ORDER BY id DESC LIMIT 10 "));
//!
//! // Nothing configured yet renders nothing.
//! assert_eq!(StatementBuilder::new().build(), "");
//! ```
//!
//! ## Optional features
//!
//! - `tracing`: emit each rendered statement as a `tracing` debug event
//! - `serde`: decode statement descriptions from TOML (see [`StatementFile`])

pub mod error;
pub mod qb;

#[cfg(feature = "serde")]
pub mod file;

pub use error::{QbError, QbResult};
pub use qb::{
    Condition, Connector, Direction, Join, JoinKind, Operand, OrderTerm, SqlQb, StatementBuilder,
};

#[cfg(feature = "serde")]
pub use file::{ConditionDef, JoinDef, OrderDef, Scalar, StatementDef, StatementFile};
