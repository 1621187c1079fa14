//! Comparison operators for filter entries.
//!
//! An entry without an operator has set-membership semantics (the
//! attribute matches any value in the entry's list). An entry with an
//! operator is a comparison predicate against its values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Comparison operator carried by a filter entry.
///
/// The serialized form and the symbol handed to the query-builder
/// collaborator are the exact literal strings `<`, `>`, `<=`, `>=`
/// and `<>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    /// Strictly less than.
    #[serde(rename = "<")]
    LessThan,

    /// Strictly greater than.
    #[serde(rename = ">")]
    GreaterThan,

    /// Less than or equal.
    #[serde(rename = "<=")]
    LessThanOrEqual,

    /// Greater than or equal.
    #[serde(rename = ">=")]
    GreaterThanOrEqual,

    /// Distinct from (not equal).
    #[serde(rename = "<>")]
    NotEqual,
}

impl Comparison {
    /// All supported operators, in symbol order.
    pub const ALL: [Self; 5] = [
        Self::LessThan,
        Self::GreaterThan,
        Self::LessThanOrEqual,
        Self::GreaterThanOrEqual,
        Self::NotEqual,
    ];

    /// Returns the wire symbol for this operator.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThanOrEqual => ">=",
            Self::NotEqual => "<>",
        }
    }

    /// Parses an operator from its wire symbol.
    ///
    /// Returns `ValidationError::UnknownOperator` for anything else;
    /// callers must not coerce unrecognized symbols into values.
    pub fn from_symbol(symbol: &str) -> Result<Self, ValidationError> {
        match symbol {
            "<" => Ok(Self::LessThan),
            ">" => Ok(Self::GreaterThan),
            "<=" => Ok(Self::LessThanOrEqual),
            ">=" => Ok(Self::GreaterThanOrEqual),
            "<>" => Ok(Self::NotEqual),
            _ => Err(ValidationError::UnknownOperator {
                symbol: symbol.to_string(),
            }),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Comparison {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}
