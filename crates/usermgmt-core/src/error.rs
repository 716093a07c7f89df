//! Error types for user storage backends.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A failure raised inside a user storage backend.
///
/// This provides typed, structured error variants for backends that want to
/// report more than an opaque boolean outcome. The controller never
/// constructs or inspects these; whatever a backend raises passes through
/// to the controller's caller unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStoreError {
    /// The backend could not be reached (connection refused, pool exhausted)
    #[error("User store unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected the record (unique email, length limit)
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl UserStoreError {
    /// Creates an Unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates a Constraint error
    pub fn constraint(message: impl Into<String>) -> Self {
        Self::Constraint(message.into())
    }

    /// Check if this is an Unavailable error
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    /// Check if this is a Constraint error
    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_helpers_and_predicates() {
        let err = UserStoreError::unavailable("connection refused");
        assert!(err.is_unavailable());
        assert!(!err.is_constraint());

        let err = UserStoreError::constraint("email already taken");
        assert!(err.is_constraint());
    }

    #[test]
    fn test_display_format() {
        let err = UserStoreError::unavailable("connection refused");
        assert_eq!(err.to_string(), "User store unavailable: connection refused");
    }
}
