//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The host referred to a form field that does not exist
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

impl ApplicationError {
    /// Whether the user can fix this by editing a form field
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(DomainError::ValidationError(_)))
    }
}
