//! # Error Types
//!
//! Validation errors for almacen-core.
//!
//! ## Error Hierarchy
//! ```text
//! almacen-core (this file)
//! └── ValidationError   - empty required fields on a draft
//!
//! almacen-db (separate crate)
//! └── DbError           - database operation failures
//!
//! apps/desktop
//! └── AppError          - what the windows display (code + message)
//!
//! Flow: ValidationError → AppError → dialog
//! ```
//!
//! The only rule the source application enforces client-side is that every
//! dialog field is non-empty. Numeric fields (precio, cantidad) are not
//! range- or type-checked; stricter typing is an optional enhancement that
//! would change observable behavior, so it is not done here.

use thiserror::Error;

/// Input validation errors raised before any database work happens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },
}

impl ValidationError {
    /// Creates a Required error for the given field name.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_the_field() {
        let err = ValidationError::required("telefono");
        assert_eq!(err.to_string(), "telefono is required");
    }
}
