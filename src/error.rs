//! Error types for FacetQL.
//!
//! All errors in FacetQL are strongly typed using thiserror.
//! This enables pattern matching on specific error conditions
//! and provides clear error messages.

use thiserror::Error;

/// Validation errors that occur during input validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required field '{field}' is missing")]
    MissingField {
        field: String,
    },

    #[error("Attribute cannot be empty")]
    EmptyAttribute,

    #[error("Field '{field}' exceeds maximum length of {max_length}")]
    FieldTooLong {
        field: String,
        max_length: usize,
    },

    #[error("Filter for '{attribute}' must carry at least one value")]
    EmptyValues {
        attribute: String,
    },

    #[error("Unknown comparison operator symbol '{symbol}'")]
    UnknownOperator {
        symbol: String,
    },
}

/// Top-level error type for FacetQL.
///
/// This enum encompasses all possible errors that can occur
/// when using FacetQL.
#[derive(Debug, Error)]
pub enum FacetError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl FacetError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is an internal error.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

/// Result type alias for FacetQL operations.
pub type FacetResult<T> = Result<T, FacetError>;
