//! Engine configuration.
//!
//! Aliases and conflict declarations are supplied by the surrounding
//! application, typically fixed for a session, and handed to the engine
//! once at construction. They are deliberately not part of the filter
//! state value, so configuration cannot drift between operations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::alias::AliasIndex;
use crate::conflict::{reverse_conflicts, ConflictDeclaration, ConflictTable};
use crate::error::{FacetError, FacetResult};

/// Declarative engine configuration.
///
/// # Example
///
/// ```
/// use facetql::FacetConfig;
///
/// let config = FacetConfig::from_json(
///     r#"{
///         "aliases": { "name": "n" },
///         "conflicts": { "date": ["month"] }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.alias_index().resolve("n"), "name");
/// assert_eq!(config.conflict_table().conflicts_with("month"), &["date".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetConfig {
    /// Declared attribute name to its short alias.
    #[serde(default)]
    pub aliases: IndexMap<String, String>,

    /// Forward conflict declaration, inverted at engine construction.
    #[serde(default)]
    pub conflicts: ConflictDeclaration,
}

impl FacetConfig {
    /// Deserializes a configuration from JSON.
    pub fn from_json(s: &str) -> FacetResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| FacetError::internal(format!("deserialize config: {e}")))
    }

    /// Builds the two-way alias index.
    #[must_use]
    pub fn alias_index(&self) -> AliasIndex {
        self.aliases
            .iter()
            .map(|(attribute, alias)| (attribute.clone(), alias.clone()))
            .collect()
    }

    /// Builds the reverse conflict table.
    #[must_use]
    pub fn conflict_table(&self) -> ConflictTable {
        reverse_conflicts(&self.conflicts)
    }
}
