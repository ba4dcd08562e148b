/// Core error types for TechNotes
use thiserror::Error;

use crate::validation::ValidationError;

/// Result type alias using `TechNotesError`
pub type Result<T> = std::result::Result<T, TechNotesError>;

/// Core error type for TechNotes
#[derive(Error, Debug)]
pub enum TechNotesError {
    /// A note or user draft failed its save rules
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Role tag outside of the fixed enumeration
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Acting user lacks the role for an operation
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}

impl TechNotesError {
    /// Create a permission denied error
    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::PermissionDenied(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_converts() {
        let err: TechNotesError = ValidationError::MissingRoles.into();
        assert_eq!(
            err.to_string(),
            "Validation failed: at least one role is required"
        );
    }

    #[test]
    fn permission_denied_message() {
        let err = TechNotesError::permission_denied("users view requires Manager or Admin");
        assert_eq!(
            err.to_string(),
            "Permission denied: users view requires Manager or Admin"
        );
    }
}
