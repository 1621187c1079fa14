//! Execution engine for FacetQL IR.
//!
//! This module provides a synchronous executor that applies operations
//! (`FacetIR`) against caller-owned filter state while keeping a
//! [`QuerySink`] collaborator in step.
//!
//! The engine itself is immutable: alias and conflict configuration is
//! fixed at construction, and every operation maps an input
//! [`FilterSet`] to a new one. Collaborator calls are emitted in
//! decision order - removals caused by conflict pruning or replacement
//! first, then the single add/update for the written entry - so a
//! caller inspecting the sink right after an operation sees a query
//! consistent with the returned state.

use tracing::{debug, trace};

use crate::alias::AliasIndex;
use crate::config::FacetConfig;
use crate::conflict::ConflictTable;
use crate::error::{FacetError, FacetResult};
use crate::filter::{FilterEntry, FilterSet};
use crate::ir::{FacetIR, FilterWrite, Operation};
use crate::operator::Comparison;
use crate::sink::QuerySink;
use crate::value::Scalar;

/// Result of executing a FacetQL operation.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineResponse {
    /// Result of an APPLY.
    Apply {
        /// The new filter state.
        state: FilterSet,
        /// Attributes whose entries were pruned as conflicting.
        pruned: Vec<String>,
    },

    /// Result of a REMOVE.
    Remove {
        /// The new filter state.
        state: FilterSet,
        /// Attributes whose entries were actually removed.
        removed: Vec<String>,
    },

    /// Result of a CLEAR.
    Clear {
        /// The new (empty) filter state.
        state: FilterSet,
    },
}

impl EngineResponse {
    /// Consumes the response, returning the new filter state.
    #[must_use]
    pub fn into_state(self) -> FilterSet {
        match self {
            Self::Apply { state, .. } | Self::Remove { state, .. } | Self::Clear { state } => state,
        }
    }
}

/// FacetQL execution engine.
///
/// Holds the session-fixed alias index and conflict table; the mutable
/// filter state stays with the caller and is passed through each call.
#[derive(Debug, Clone, Default)]
pub struct FacetEngine {
    aliases: AliasIndex,
    conflicts: ConflictTable,
}

impl FacetEngine {
    /// Create a new engine with the given configuration.
    #[must_use]
    pub fn new(aliases: AliasIndex, conflicts: ConflictTable) -> Self {
        Self { aliases, conflicts }
    }

    /// Create a new engine from declarative configuration.
    #[must_use]
    pub fn from_config(config: &FacetConfig) -> Self {
        Self::new(config.alias_index(), config.conflict_table())
    }

    /// Get a reference to the alias index.
    pub fn alias_index(&self) -> &AliasIndex {
        &self.aliases
    }

    /// Get a reference to the conflict table.
    pub fn conflict_table(&self) -> &ConflictTable {
        &self.conflicts
    }

    /// Execute a FacetQL IR request.
    pub fn execute(
        &self,
        state: &FilterSet,
        ir: FacetIR,
        sink: &mut dyn QuerySink,
    ) -> FacetResult<EngineResponse> {
        // Defensive validation for deserialized IR.
        // Builders already validate, but embedded execution must not trust inputs.
        ir.operation.validate().map_err(FacetError::from)?;

        match ir.operation {
            Operation::Apply(payload) => {
                let (state, pruned) =
                    self.apply_write(state, &payload.attribute, payload.write, sink);
                Ok(EngineResponse::Apply { state, pruned })
            }
            Operation::Remove(payload) => {
                let (state, removed) = self.remove_matching(state, &payload.attributes, sink);
                Ok(EngineResponse::Remove { state, removed })
            }
            Operation::Clear => Ok(EngineResponse::Clear {
                state: self.clear(state, sink),
            }),
        }
    }

    /// Apply a set-membership write.
    ///
    /// With `overwrite` false, values are concatenated onto an existing
    /// entry in place; with `overwrite` true (or no existing entry) the
    /// entry is (re)created at the end of the list.
    pub fn apply_value(
        &self,
        state: &FilterSet,
        attribute: &str,
        values: Vec<Scalar>,
        overwrite: bool,
        sink: &mut dyn QuerySink,
    ) -> FilterSet {
        self.apply_write(state, attribute, FilterWrite::Value { values, overwrite }, sink)
            .0
    }

    /// Apply a comparison write, fully replacing any prior entry for
    /// the attribute.
    pub fn apply_comparison(
        &self,
        state: &FilterSet,
        attribute: &str,
        operator: Comparison,
        values: Vec<Scalar>,
        sink: &mut dyn QuerySink,
    ) -> FilterSet {
        self.apply_write(
            state,
            attribute,
            FilterWrite::Comparison { operator, values },
            sink,
        )
        .0
    }

    /// Remove every entry matching one of the given names or aliases.
    /// Keys with no matching entry are silently ignored.
    pub fn remove(
        &self,
        state: &FilterSet,
        attributes: &[String],
        sink: &mut dyn QuerySink,
    ) -> FilterSet {
        self.remove_matching(state, attributes, sink).0
    }

    /// Remove all entries with a single bulk collaborator call.
    pub fn clear(&self, state: &FilterSet, sink: &mut dyn QuerySink) -> FilterSet {
        sink.clear_predicates();
        debug!(dropped = state.len(), "cleared filters");
        FilterSet::new()
    }

    fn apply_write(
        &self,
        state: &FilterSet,
        attribute: &str,
        write: FilterWrite,
        sink: &mut dyn QuerySink,
    ) -> (FilterSet, Vec<String>) {
        let attribute = self.aliases.resolve(attribute).to_string();
        let mut entries = state.entries().to_vec();

        // Conflict pruning happens in both modes, before the write is
        // finalized.
        let pruned = self.prune_conflicting(&mut entries, &attribute, sink);

        let written = match write {
            FilterWrite::Comparison { operator, values } => {
                self.drop_existing(&mut entries, &attribute, sink);
                entries.push(FilterEntry::comparison(attribute.clone(), operator, values));
                entries.len() - 1
            }
            FilterWrite::Value { values, overwrite } => {
                if overwrite {
                    self.drop_existing(&mut entries, &attribute, sink);
                    entries.push(FilterEntry::membership(attribute.clone(), values));
                    entries.len() - 1
                } else if let Some(idx) = self.position(&entries, &attribute) {
                    entries[idx].extend_values(values);
                    idx
                } else {
                    entries.push(FilterEntry::membership(attribute.clone(), values));
                    entries.len() - 1
                }
            }
        };

        let entry = &entries[written];
        sink.add_or_update_predicate(entry.attribute(), entry.values(), entry.operator());
        debug!(
            attribute = %entry.attribute(),
            pruned = pruned.len(),
            "applied filter write"
        );

        (FilterSet::from_entries(entries), pruned)
    }

    fn remove_matching(
        &self,
        state: &FilterSet,
        attributes: &[String],
        sink: &mut dyn QuerySink,
    ) -> (FilterSet, Vec<String>) {
        let resolved: Vec<&str> = attributes.iter().map(|a| self.aliases.resolve(a)).collect();

        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(state.len());
        for entry in state.entries().iter().cloned() {
            let matches = resolved
                .iter()
                .any(|r| *r == self.aliases.resolve(entry.attribute()));
            if matches {
                sink.remove_predicate(entry.attribute());
                removed.push(entry.attribute().to_string());
            } else {
                kept.push(entry);
            }
        }

        debug!(removed = removed.len(), "removed filters");
        (FilterSet::from_entries(kept), removed)
    }

    // Drop entries invalidated by the incoming attribute, emitting one
    // removal per dropped entry.
    fn prune_conflicting(
        &self,
        entries: &mut Vec<FilterEntry>,
        attribute: &str,
        sink: &mut dyn QuerySink,
    ) -> Vec<String> {
        let mut pruned = Vec::new();
        for conflicting in self.conflicts.conflicts_with(attribute) {
            let resolved = self.aliases.resolve(conflicting);
            let mut i = 0;
            while i < entries.len() {
                if self.aliases.resolve(entries[i].attribute()) == resolved {
                    let dropped = entries.remove(i);
                    trace!(attribute = %dropped.attribute(), "pruned conflicting filter");
                    sink.remove_predicate(dropped.attribute());
                    pruned.push(dropped.attribute().to_string());
                } else {
                    i += 1;
                }
            }
        }
        pruned
    }

    fn drop_existing(
        &self,
        entries: &mut Vec<FilterEntry>,
        attribute: &str,
        sink: &mut dyn QuerySink,
    ) {
        if let Some(idx) = self.position(entries, attribute) {
            let dropped = entries.remove(idx);
            sink.remove_predicate(dropped.attribute());
        }
    }

    fn position(&self, entries: &[FilterEntry], resolved: &str) -> Option<usize> {
        entries
            .iter()
            .position(|e| self.aliases.resolve(e.attribute()) == resolved)
    }
}
