//! Domain layer error types
//!
//! All errors that can occur in domain layer operations.

use thiserror::Error;

use crate::selector::SelectorError;

/// Main domain error type
#[derive(Error, Debug)]
pub enum DomainError {
    /// Element the markup contract promises is missing
    #[error("Element not found: {0}")]
    NotFound(String),

    /// Node handle does not belong to the document or was removed
    #[error("Invalid node: {0}")]
    InvalidNode(String),

    /// Selector failed to parse
    #[error("Selector error: {0}")]
    Selector(#[from] SelectorError),

    /// Preference store failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error (wrapped)
    #[error("IO error: {0}")]
    IoError(String),

    /// Markup or script parse error
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::ParseError(err.to_string())
    }
}

impl From<toml::de::Error> for DomainError {
    fn from(err: toml::de::Error) -> Self {
        DomainError::ParseError(err.to_string())
    }
}
