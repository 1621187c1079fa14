//! Bidirectional attribute/alias index.
//!
//! Filter entries are stored under their declared attribute names, but
//! callers may address them through short aliases. The index is built
//! once from configuration as an explicit two-way map, so resolution in
//! either direction is a single lookup rather than a scan.

use bimap::BiMap;

/// Two-way index between declared attribute names and their aliases.
///
/// `resolve` checks the alias direction first: a key that is some
/// attribute's alias resolves to that attribute even if the key also
/// names an attribute of its own. Keys known in neither direction pass
/// through unchanged, so callers can use attribute names freely without
/// declaring an alias for every attribute.
#[derive(Debug, Clone)]
pub struct AliasIndex {
    index: BiMap<String, String>,
}

impl AliasIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: BiMap::new(),
        }
    }

    /// Declares an alias for an attribute.
    ///
    /// A one-to-one mapping is enforced; re-declaring either side
    /// replaces the previous pairing.
    pub fn insert(&mut self, attribute: impl Into<String>, alias: impl Into<String>) {
        self.index.insert(attribute.into(), alias.into());
    }

    /// Resolves a key to the canonical attribute name.
    ///
    /// This is a total function: unknown keys are returned unchanged.
    #[must_use]
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        match self.index.get_by_right(key) {
            Some(attribute) => attribute.as_str(),
            None => key,
        }
    }

    /// Returns the alias declared for an attribute, if any.
    #[must_use]
    pub fn alias_of(&self, attribute: &str) -> Option<&str> {
        self.index.get_by_left(attribute).map(String::as_str)
    }

    /// Number of declared aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if no aliases are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl Default for AliasIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Into<String>, B: Into<String>> FromIterator<(A, B)> for AliasIndex {
    fn from_iter<T: IntoIterator<Item = (A, B)>>(iter: T) -> Self {
        let mut index = Self::new();
        for (attribute, alias) in iter {
            index.insert(attribute, alias);
        }
        index
    }
}
