//! REMOVE operation builder.

use crate::error::ValidationError;
use crate::ir::{FacetIR, Operation, RemovePayload};

/// Builder for REMOVE operations.
///
/// # Example
/// ```rust,ignore
/// let ir = RemoveBuilder::new()
///     .attribute("name")
///     .attribute("age")
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct RemoveBuilder {
    attributes: Vec<String>,
}

impl RemoveBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute to remove, by name or alias.
    #[must_use]
    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    /// Add several attributes to remove.
    #[must_use]
    pub fn attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes.extend(attributes.into_iter().map(Into::into));
        self
    }

    /// Build the REMOVE IR.
    ///
    /// Returns `ValidationError::MissingField` if no attribute was
    /// added and `ValidationError::EmptyAttribute` if any added key is
    /// empty or whitespace.
    pub fn build(self) -> Result<FacetIR, ValidationError> {
        if self.attributes.is_empty() {
            return Err(ValidationError::MissingField {
                field: "attributes".to_string(),
            });
        }

        let mut attributes = Vec::with_capacity(self.attributes.len());
        for attribute in self.attributes {
            let attribute = attribute.trim().to_string();
            if attribute.is_empty() {
                return Err(ValidationError::EmptyAttribute);
            }
            attributes.push(attribute);
        }

        Ok(FacetIR::new(Operation::Remove(RemovePayload {
            attributes,
        })))
    }
}
