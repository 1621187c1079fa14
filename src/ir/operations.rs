//! FacetQL operation definitions and payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::operator::Comparison;
use crate::value::Scalar;

/// The top-level IR wrapper for all FacetQL operations.
///
/// Every operation is wrapped in this struct to provide:
/// - Protocol versioning for forward/backward compatibility
/// - Request tracking via unique IDs
/// - Timestamp for audit logs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetIR {
    /// Protocol version (e.g., "1.0").
    pub version: String,

    /// Unique identifier for this request (for tracing/debugging).
    pub request_id: Uuid,

    /// When this IR was created.
    pub timestamp: DateTime<Utc>,

    /// The operation to execute.
    pub operation: Operation,
}

impl FacetIR {
    /// Current protocol version.
    pub const CURRENT_VERSION: &'static str = "1.0";

    /// Creates a new IR with the given operation.
    pub fn new(operation: Operation) -> Self {
        Self {
            version: Self::CURRENT_VERSION.to_string(),
            request_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            operation,
        }
    }

    /// Sets a custom request ID (useful for correlation).
    #[must_use]
    pub fn with_request_id(mut self, request_id: Uuid) -> Self {
        self.request_id = request_id;
        self
    }
}

/// All supported FacetQL operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "payload", rename_all = "snake_case")]
pub enum Operation {
    /// Apply (create, merge or replace) a filter entry.
    Apply(ApplyPayload),

    /// Remove filter entries by attribute name or alias.
    Remove(RemovePayload),

    /// Remove every filter entry at once.
    Clear,
}

/// Payload for APPLY operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyPayload {
    /// The attribute being filtered, addressed by name or alias.
    pub attribute: String,

    /// The write to perform against the attribute's entry.
    pub write: FilterWrite,
}

/// The two filter write modes, as an explicit tagged variant.
///
/// The mode is part of the request type, so a request whose mode tag is
/// unrecognized fails deserialization outright instead of being coerced
/// into the wrong write semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FilterWrite {
    /// Set-membership write: the values are stored literally, with no
    /// operator, even when a value happens to spell an operator symbol.
    Value {
        /// Values to store or merge.
        values: Vec<Scalar>,

        /// When true, any existing entry for the attribute is replaced
        /// and the new entry moves to the end of the list. When false,
        /// values are concatenated onto an existing entry in place.
        #[serde(default)]
        overwrite: bool,
    },

    /// Comparison write: always fully replaces any prior entry for the
    /// attribute, never merges.
    Comparison {
        /// The comparison operator.
        operator: Comparison,

        /// Values the comparison is made against.
        values: Vec<Scalar>,
    },
}

impl FilterWrite {
    /// The values carried by this write.
    #[must_use]
    pub fn values(&self) -> &[Scalar] {
        match self {
            Self::Value { values, .. } | Self::Comparison { values, .. } => values,
        }
    }
}

/// Payload for REMOVE operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovePayload {
    /// Attribute names or aliases whose entries should be removed.
    /// Keys with no matching entry are silently ignored.
    pub attributes: Vec<String>,
}
