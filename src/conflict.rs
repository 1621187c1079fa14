//! Conflict declarations and the derived reverse lookup.
//!
//! Configuration declares conflicts in the forward direction: "while
//! attribute A is set, these attributes are invalid". At apply time the
//! engine needs the opposite question answered - "setting B invalidates
//! which attributes?" - so the declaration is inverted once into a
//! [`ConflictTable`] when the engine is built.
//!
//! The canonical example is mutually exclusive granularity: declaring
//! `date: [month]` means a month-level filter replaces a coarser
//! date-level one, so applying `month` prunes any stored `date` entry.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Forward conflict declaration: attribute to the attributes whose
/// presence it conflicts with.
///
/// Insertion order is preserved so the derived table lists originating
/// attributes in first-seen declaration order.
pub type ConflictDeclaration = IndexMap<String, Vec<String>>;

/// Reverse conflict lookup derived from a [`ConflictDeclaration`].
///
/// For each attribute B listed in some A's declaration, the table maps
/// B to every A that listed it. Applying a filter on B then prunes all
/// of those A entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConflictTable {
    reverse: HashMap<String, Vec<String>>,
}

impl ConflictTable {
    /// The attributes pruned when `attribute` is newly set.
    ///
    /// Returns an empty slice for attributes with no declared conflict.
    #[must_use]
    pub fn conflicts_with(&self, attribute: &str) -> &[String] {
        match self.reverse.get(attribute) {
            Some(sources) => sources,
            None => &[],
        }
    }

    /// Number of attributes with at least one declared conflict.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    /// Returns true if no conflicts are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }
}

/// Inverts a forward conflict declaration into a [`ConflictTable`].
///
/// For every key K declaring `[V1..Vn]`, K is appended to the output
/// list of each Vi. No entry is created for K itself unless K appears
/// in another key's list. Pure and deterministic: per-target list order
/// follows the first-seen order of the originating keys.
#[must_use]
pub fn reverse_conflicts(declaration: &ConflictDeclaration) -> ConflictTable {
    let mut reverse: HashMap<String, Vec<String>> = HashMap::new();
    for (source, targets) in declaration {
        for target in targets {
            reverse.entry(target.clone()).or_default().push(source.clone());
        }
    }
    ConflictTable { reverse }
}
