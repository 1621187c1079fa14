//! IR serialization helpers.
//!
//! Serde already provides JSON (and other) serialization. This module
//! centralizes convenience helpers used by callers and keeps formatting
//! stable.

use crate::error::FacetError;
use crate::ir::operations::FacetIR;

/// Serialize an IR to pretty JSON.
pub fn to_json_pretty(ir: &FacetIR) -> Result<String, FacetError> {
    serde_json::to_string_pretty(ir).map_err(|e| FacetError::internal(format!("serialize IR: {e}")))
}

/// Deserialize an IR from JSON.
///
/// Callers should then invoke `ir.operation.validate()` before
/// executing; `FacetEngine::execute` does so as well.
pub fn from_json(s: &str) -> Result<FacetIR, FacetError> {
    serde_json::from_str::<FacetIR>(s).map_err(|e| FacetError::internal(format!("deserialize IR: {e}")))
}
