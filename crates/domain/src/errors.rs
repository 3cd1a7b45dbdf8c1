//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
///
/// Only coordinate text can be rejected. Malformed maps links and missing
/// markers degrade to empty fields instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Coordinate text is malformed or out of its geographic range
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// The human-readable message, without the error prefix
    pub fn message(&self) -> &str {
        match self {
            Self::ValidationError(message) => message,
        }
    }
}
