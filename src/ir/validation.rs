//! IR validation.
//!
//! This module performs validation on deserialized IR payloads.
//! Builders already validate inputs, but IR validation is required to
//! defend embedded execution against malformed or adversarial JSON.

use crate::error::ValidationError;
use crate::ir::operations::{ApplyPayload, FilterWrite, Operation, RemovePayload};

/// Conservative upper bound for free-form text fields.
pub const MAX_TEXT_LEN: usize = 16 * 1024;

/// Conservative upper bound for value lists and remove batches.
pub const MAX_VALUES: usize = 4096;

/// Validate a non-empty trimmed string field.
fn validate_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(ValidationError::MissingField {
            field: field.to_string(),
        });
    }
    if v.len() > MAX_TEXT_LEN {
        return Err(ValidationError::FieldTooLong {
            field: field.to_string(),
            max_length: MAX_TEXT_LEN,
        });
    }
    Ok(())
}

fn validate_values(attribute: &str, values: &[crate::value::Scalar]) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::EmptyValues {
            attribute: attribute.to_string(),
        });
    }
    if values.len() > MAX_VALUES {
        return Err(ValidationError::FieldTooLong {
            field: "values".to_string(),
            max_length: MAX_VALUES,
        });
    }
    Ok(())
}

impl ApplyPayload {
    /// Validates this payload.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_non_empty("attribute", &self.attribute)?;
        match &self.write {
            FilterWrite::Value { values, .. } | FilterWrite::Comparison { values, .. } => {
                validate_values(&self.attribute, values)?;
            }
        }
        Ok(())
    }
}

impl RemovePayload {
    /// Validates this payload.
    ///
    /// An empty attribute list is permitted (the operation is then a
    /// no-op), but every listed key must be a non-empty name or alias.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.attributes.len() > MAX_VALUES {
            return Err(ValidationError::FieldTooLong {
                field: "attributes".to_string(),
                max_length: MAX_VALUES,
            });
        }
        for attribute in &self.attributes {
            validate_non_empty("attributes", attribute)?;
        }
        Ok(())
    }
}

impl Operation {
    /// Validate the operation payload.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Apply(p) => p.validate(),
            Self::Remove(p) => p.validate(),
            Self::Clear => Ok(()),
        }
    }
}
