//! Filter entries and the ordered filter set.
//!
//! A [`FilterEntry`] is one stored predicate, keyed by attribute. A
//! [`FilterSet`] is the ordered collection of active entries and is the
//! only mutable-looking piece of state in the crate: callers own it,
//! pass it by value through engine operations, and receive a new set
//! back. Entries appear in insertion order; overwriting moves the
//! affected entry to the end.

use serde::{Deserialize, Serialize};

use crate::operator::Comparison;
use crate::value::Scalar;

/// One stored predicate, keyed by attribute.
///
/// Entries created through the engine hold the canonical (non-aliased)
/// attribute name and a non-empty value list. An entry without an
/// operator means set membership (attribute matches any listed value);
/// an entry with an operator is a comparison predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterEntry {
    attribute: String,
    values: Vec<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    operator: Option<Comparison>,
}

impl FilterEntry {
    /// Creates a set-membership entry.
    #[must_use]
    pub fn membership(attribute: impl Into<String>, values: Vec<Scalar>) -> Self {
        Self {
            attribute: attribute.into(),
            values,
            operator: None,
        }
    }

    /// Creates a comparison entry.
    #[must_use]
    pub fn comparison(
        attribute: impl Into<String>,
        operator: Comparison,
        values: Vec<Scalar>,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            values,
            operator: Some(operator),
        }
    }

    /// The stored (canonical) attribute name.
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// The ordered value list.
    #[must_use]
    pub fn values(&self) -> &[Scalar] {
        &self.values
    }

    /// The comparison operator, if any.
    #[must_use]
    pub const fn operator(&self) -> Option<Comparison> {
        self.operator
    }

    // Merge-mode concatenation: input order preserved, no deduplication.
    pub(crate) fn extend_values(&mut self, more: Vec<Scalar>) {
        self.values.extend(more);
    }
}

/// The ordered set of active filter entries.
///
/// Attribute names are unique across entries; engine operations restore
/// the invariant within the same operation that would otherwise violate
/// it. The set is immutable value data: every engine operation returns
/// a new `FilterSet` rather than mutating its input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    entries: Vec<FilterEntry>,
}

impl FilterSet {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filter set from pre-built entries.
    ///
    /// Attribute uniqueness is the caller's responsibility here; sets
    /// produced by engine operations always uphold it.
    #[must_use]
    pub fn from_entries(entries: Vec<FilterEntry>) -> Self {
        Self { entries }
    }

    /// The entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[FilterEntry] {
        &self.entries
    }

    /// Looks up the entry stored under an attribute name.
    ///
    /// Lookup is by the stored attribute; alias resolution happens in
    /// the engine before any membership comparison.
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&FilterEntry> {
        self.entries.iter().find(|e| e.attribute == attribute)
    }

    /// Returns true if an entry is stored under the attribute name.
    #[must_use]
    pub fn contains(&self, attribute: &str) -> bool {
        self.get(attribute).is_some()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, FilterEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a FilterEntry;
    type IntoIter = std::slice::Iter<'a, FilterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_entry() {
        let entry = FilterEntry::membership("name", vec!["Carlos".into()]);
        assert_eq!(entry.attribute(), "name");
        assert_eq!(entry.values(), &[Scalar::String("Carlos".into())]);
        assert_eq!(entry.operator(), None);
    }

    #[test]
    fn test_comparison_entry() {
        let entry = FilterEntry::comparison("age", Comparison::LessThan, vec![18.into()]);
        assert_eq!(entry.operator(), Some(Comparison::LessThan));
        assert_eq!(entry.values(), &[Scalar::Int(18)]);
    }

    #[test]
    fn test_extend_values_keeps_order_and_duplicates() {
        let mut entry = FilterEntry::membership("name", vec!["a".into(), "b".into()]);
        entry.extend_values(vec!["b".into(), "c".into()]);
        let got: Vec<&str> = entry.values().iter().filter_map(Scalar::as_string).collect();
        assert_eq!(got, vec!["a", "b", "b", "c"]);
    }

    #[test]
    fn test_filter_set_lookup() {
        let set = FilterSet::from_entries(vec![
            FilterEntry::membership("name", vec!["Carlos".into()]),
            FilterEntry::membership("age", vec![28.into()]),
        ]);

        assert_eq!(set.len(), 2);
        assert!(set.contains("name"));
        assert!(!set.contains("city"));
        assert_eq!(set.get("age").unwrap().values(), &[Scalar::Int(28)]);
    }

    #[test]
    fn test_filter_set_preserves_order() {
        let set = FilterSet::from_entries(vec![
            FilterEntry::membership("b", vec![1.into()]),
            FilterEntry::membership("a", vec![2.into()]),
        ]);
        let attributes: Vec<&str> = set.iter().map(FilterEntry::attribute).collect();
        assert_eq!(attributes, vec!["b", "a"]);
    }

    #[test]
    fn test_entry_serialization_omits_missing_operator() {
        let entry = FilterEntry::membership("name", vec!["Carlos".into()]);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("operator"));

        let entry = FilterEntry::comparison("age", Comparison::NotEqual, vec![18.into()]);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operator\":\"<>\""));
    }

    #[test]
    fn test_filter_set_serialization_roundtrip() {
        let set = FilterSet::from_entries(vec![
            FilterEntry::membership("name", vec!["Carlos".into()]),
            FilterEntry::comparison("age", Comparison::GreaterThan, vec![18.into()]),
        ]);
        let json = serde_json::to_string(&set).unwrap();
        let decoded: FilterSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, decoded);
    }
}
