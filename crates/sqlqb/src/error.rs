//! Error types for sqlqb

use thiserror::Error;

/// Result type alias for sqlqb operations
pub type QbResult<T> = Result<T, QbError>;

/// Error types for statement building
///
/// Rendering itself never fails; these only surface from the checked
/// entry points (`try_build`, `validate`) and the statement-file front-end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QbError {
    /// No terminal operation (`select`/`insert`/`delete`) was chosen
    #[error("Statement is unconfigured: call select, insert or delete first")]
    Unconfigured,

    /// Rejected input value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Statement file could not be decoded
    #[error("Config error: {0}")]
    Config(String),
}

impl QbError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is an unconfigured-builder error
    pub fn is_unconfigured(&self) -> bool {
        matches!(self, Self::Unconfigured)
    }
}

#[cfg(feature = "serde")]
impl From<toml::de::Error> for QbError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
