//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// No caller identity was supplied for an operation that needs one
    #[error("Not authenticated")]
    Unauthenticated,

    /// The record is absent or owned by someone else.
    ///
    /// Both cases share one variant so callers cannot probe for
    /// records belonging to other owners.
    #[error("{entity_type} not found or unauthorized")]
    NotFoundOrUnauthorized { entity_type: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T) -> Self {
        Self::NotFoundOrUnauthorized {
            entity_type: entity_type.as_ref().to_string(),
        }
    }

    pub fn invalid<T: Into<String>>(message: T) -> Self {
        Self::InvalidArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_hides_ownership() {
        let err = DomainError::not_found("Memory");
        assert_eq!(err.to_string(), "Memory not found or unauthorized");
    }
}
