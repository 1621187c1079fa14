//! The query-builder collaborator boundary.
//!
//! The engine never executes queries. It keeps an external query
//! representation - a SQL builder, a URL query string, an API request
//! object - synchronized with the filter state by emitting calls on a
//! [`QuerySink`]. Calls are fire-and-forget from the engine's point of
//! view and arrive synchronously, in decision order: every removal
//! caused by an operation precedes the corresponding addition.

use crate::operator::Comparison;
use crate::value::Scalar;

/// External sink kept in sync with the filter list, representing the
/// executable query.
///
/// Implementations own whatever concrete query representation they
/// like; the engine only requires these three predicate operations. No
/// return values are consulted.
pub trait QuerySink {
    /// Add or update the predicate for an attribute. `operator` is
    /// `None` for set-membership predicates.
    fn add_or_update_predicate(
        &mut self,
        attribute: &str,
        values: &[Scalar],
        operator: Option<Comparison>,
    );

    /// Remove the predicate for an attribute.
    fn remove_predicate(&mut self, attribute: &str);

    /// Remove every predicate at once.
    fn clear_predicates(&mut self);
}

/// A single recorded collaborator call.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    /// An `add_or_update_predicate` call.
    AddOrUpdate {
        /// The attribute written.
        attribute: String,
        /// The values written.
        values: Vec<Scalar>,
        /// The operator written, if any.
        operator: Option<Comparison>,
    },

    /// A `remove_predicate` call.
    Remove {
        /// The attribute removed.
        attribute: String,
    },

    /// A `clear_predicates` call.
    Clear,
}

/// Recording implementation of [`QuerySink`].
///
/// Captures every call in order. Intended for tests, benches and any
/// caller that wants to replay the emitted predicate operations against
/// a real query representation later.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    calls: Vec<SinkCall>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded calls, in emission order.
    #[must_use]
    pub fn calls(&self) -> &[SinkCall] {
        &self.calls
    }

    /// Drains and returns the recorded calls.
    pub fn take_calls(&mut self) -> Vec<SinkCall> {
        std::mem::take(&mut self.calls)
    }
}

impl QuerySink for RecordingSink {
    fn add_or_update_predicate(
        &mut self,
        attribute: &str,
        values: &[Scalar],
        operator: Option<Comparison>,
    ) {
        self.calls.push(SinkCall::AddOrUpdate {
            attribute: attribute.to_string(),
            values: values.to_vec(),
            operator,
        });
    }

    fn remove_predicate(&mut self, attribute: &str) {
        self.calls.push(SinkCall::Remove {
            attribute: attribute.to_string(),
        });
    }

    fn clear_predicates(&mut self) {
        self.calls.push(SinkCall::Clear);
    }
}
