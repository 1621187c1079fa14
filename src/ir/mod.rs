//! Intermediate Representation (IR) for FacetQL operations.
//!
//! The IR provides a serializable, transportable format for all FacetQL
//! operations. This enables:
//! - Operation logging and replay
//! - Debugging and inspection
//! - Transport between a UI layer and an embedded engine

mod operations;
mod serialization;
mod validation;

pub use operations::{ApplyPayload, FacetIR, FilterWrite, Operation, RemovePayload};

pub use serialization::{from_json, to_json_pretty};
pub use validation::{MAX_TEXT_LEN, MAX_VALUES};
