//! Error types for record coercion and aggregation

use thiserror::Error;

/// Core tally errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Cannot coerce {value} to a number: {reason}")]
    Coercion { value: String, reason: String },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(String),
}

impl Error {
    /// Build a coercion error for the given rendered value
    pub fn coercion(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Coercion {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// True for the coercion failure raised on malformed numeric input
    pub fn is_coercion(&self) -> bool {
        matches!(self, Self::Coercion { .. })
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
