//! APPLY operation builder.
//!
//! The ApplyBuilder provides a fluent, type-safe API for constructing
//! APPLY operations. It validates all inputs before producing IR, and
//! it decides the write mode from which setters were called: setting a
//! comparison operator produces a comparison write, otherwise the build
//! produces a set-membership value write.

use crate::error::ValidationError;
use crate::ir::{ApplyPayload, FacetIR, FilterWrite, Operation};
use crate::operator::Comparison;
use crate::value::Scalar;

/// Builder for APPLY operations.
///
/// # Example
/// ```rust,ignore
/// // merge "Carlos" into the name filter
/// let ir = ApplyBuilder::new()
///     .attribute("name")
///     .value("Carlos")
///     .build()?;
///
/// // replace the age filter with a comparison
/// let ir = ApplyBuilder::new()
///     .attribute("age")
///     .comparison(Comparison::LessThan)
///     .value(18)
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ApplyBuilder {
    attribute: Option<String>,
    values: Vec<Scalar>,
    operator: Option<Comparison>,
    overwrite: bool,
}

impl ApplyBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the attribute to filter, by name or alias (required).
    #[must_use]
    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Add a single value. A bare scalar becomes a one-element list.
    #[must_use]
    pub fn value(mut self, value: impl Into<Scalar>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Add several values, preserving their order.
    #[must_use]
    pub fn values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    /// Replace any existing entry instead of merging (value mode only;
    /// comparison writes always replace). Default: false.
    #[must_use]
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Make this a comparison write with the given operator.
    #[must_use]
    pub fn comparison(mut self, operator: Comparison) -> Self {
        self.operator = Some(operator);
        self
    }

    /// Build the APPLY IR.
    ///
    /// Returns `ValidationError::MissingField` if no attribute was set,
    /// `ValidationError::EmptyAttribute` if it is empty or whitespace,
    /// and `ValidationError::EmptyValues` if no values were added.
    pub fn build(self) -> Result<FacetIR, ValidationError> {
        let attribute = self
            .attribute
            .ok_or_else(|| ValidationError::MissingField {
                field: "attribute".to_string(),
            })?;

        let attribute = attribute.trim().to_string();
        if attribute.is_empty() {
            return Err(ValidationError::EmptyAttribute);
        }

        if self.values.is_empty() {
            return Err(ValidationError::EmptyValues { attribute });
        }

        let write = match self.operator {
            Some(operator) => FilterWrite::Comparison {
                operator,
                values: self.values,
            },
            None => FilterWrite::Value {
                values: self.values,
                overwrite: self.overwrite,
            },
        };

        Ok(FacetIR::new(Operation::Apply(ApplyPayload {
            attribute,
            write,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_value_build() {
        let ir = ApplyBuilder::new()
            .attribute("name")
            .value("Carlos Garcia")
            .build()
            .unwrap();

        let Operation::Apply(payload) = ir.operation else {
            panic!("expected apply operation");
        };
        assert_eq!(payload.attribute, "name");
        assert!(matches!(
            payload.write,
            FilterWrite::Value { overwrite: false, .. }
        ));
    }

    #[test]
    fn test_attribute_is_trimmed() {
        let ir = ApplyBuilder::new()
            .attribute("  name  ")
            .value("Carlos")
            .build()
            .unwrap();

        match ir.operation {
            Operation::Apply(payload) => assert_eq!(payload.attribute, "name"),
            _ => panic!("expected apply operation"),
        }
    }

    #[test]
    fn test_missing_attribute() {
        let result = ApplyBuilder::new().value("Carlos").build();

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { field } if field == "attribute"));
    }

    #[test]
    fn test_whitespace_attribute() {
        let result = ApplyBuilder::new().attribute("   ").value(1).build();

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ValidationError::EmptyAttribute));
    }

    #[test]
    fn test_missing_values() {
        let result = ApplyBuilder::new().attribute("name").build();

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ValidationError::EmptyValues { .. }));
    }

    #[test]
    fn test_values_preserve_order() {
        let ir = ApplyBuilder::new()
            .attribute("name")
            .values(["Carlos", "Juan"])
            .value("Maria")
            .build()
            .unwrap();

        let Operation::Apply(payload) = ir.operation else {
            panic!("expected apply operation");
        };
        let got: Vec<&str> = payload
            .write
            .values()
            .iter()
            .filter_map(Scalar::as_string)
            .collect();
        assert_eq!(got, vec!["Carlos", "Juan", "Maria"]);
    }

    #[test]
    fn test_overwrite_flag() {
        let ir = ApplyBuilder::new()
            .attribute("name")
            .value("Juan")
            .overwrite(true)
            .build()
            .unwrap();

        let Operation::Apply(payload) = ir.operation else {
            panic!("expected apply operation");
        };
        assert!(matches!(
            payload.write,
            FilterWrite::Value { overwrite: true, .. }
        ));
    }

    #[test]
    fn test_comparison_build() {
        let ir = ApplyBuilder::new()
            .attribute("age")
            .comparison(Comparison::LessThanOrEqual)
            .value(18)
            .build()
            .unwrap();

        let Operation::Apply(payload) = ir.operation else {
            panic!("expected apply operation");
        };
        assert!(matches!(
            payload.write,
            FilterWrite::Comparison {
                operator: Comparison::LessThanOrEqual,
                ..
            }
        ));
    }

    #[test]
    fn test_comparison_requires_values_too() {
        let result = ApplyBuilder::new()
            .attribute("age")
            .comparison(Comparison::GreaterThan)
            .build();

        assert!(matches!(result.unwrap_err(), ValidationError::EmptyValues { .. }));
    }
}
