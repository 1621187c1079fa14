//! # FacetQL - Filter-State Synchronization for Faceted Queries
//!
//! FacetQL maintains the canonical in-memory set of filter predicates
//! applied to a dataset or query, and keeps a paired external query
//! representation synchronized with it. The typical consumer is a
//! filterable list or table UI where users add, edit and remove
//! predicates, while an underlying query (SQL builder, URL query
//! string, API request object) must always mirror the declared state.
//!
//! ## Core Concepts
//!
//! - **FilterEntry**: One stored predicate, keyed by attribute, holding
//!   an ordered value list and an optional comparison operator
//! - **FilterSet**: The ordered, attribute-unique collection of active
//!   entries; immutable value data passed through every operation
//! - **AliasIndex**: Two-way index letting callers address attributes
//!   by declared name or short alias
//! - **ConflictTable**: Reverse lookup derived from forward conflict
//!   declarations, pruning mutually exclusive filters at apply time
//! - **QuerySink**: The external query-builder collaborator receiving
//!   add/remove/clear predicate calls in decision order
//!
//! ## Usage
//!
//! ```rust,ignore
//! use facetql::{ApplyBuilder, Comparison, FacetConfig, FacetEngine, FilterSet, RecordingSink};
//!
//! let config = FacetConfig::from_json(
//!     r#"{ "aliases": { "name": "n" }, "conflicts": { "date": ["month"] } }"#,
//! )?;
//! let engine = FacetEngine::from_config(&config);
//!
//! let mut sink = RecordingSink::new();
//! let state = FilterSet::new();
//!
//! // merge a membership value
//! let ir = ApplyBuilder::new().attribute("name").value("Carlos").build()?;
//! let state = engine.execute(&state, ir, &mut sink)?.into_state();
//!
//! // replace with a comparison predicate
//! let ir = ApplyBuilder::new()
//!     .attribute("age")
//!     .comparison(Comparison::LessThan)
//!     .value(18)
//!     .build()?;
//! let state = engine.execute(&state, ir, &mut sink)?.into_state();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Core types
pub mod alias;
pub mod config;
pub mod conflict;
pub mod error;
pub mod filter;
pub mod operator;
pub mod value;

// IR, operations, and execution
pub mod engine;
pub mod ir;
pub mod operations;
pub mod sink;

// Re-export primary types at crate root for convenience
pub use alias::AliasIndex;
pub use config::FacetConfig;
pub use conflict::{reverse_conflicts, ConflictDeclaration, ConflictTable};
pub use engine::{EngineResponse, FacetEngine};
pub use error::{FacetError, FacetResult, ValidationError};
pub use filter::{FilterEntry, FilterSet};
pub use operator::Comparison;
pub use value::Scalar;

// IR re-exports
pub use ir::{ApplyPayload, FacetIR, FilterWrite, Operation, RemovePayload};
pub use operations::{ApplyBuilder, RemoveBuilder};
pub use sink::{QuerySink, RecordingSink, SinkCall};
