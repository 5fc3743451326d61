//! DynamicProperties — the shared, ordered attribute store.

use serde::{Deserialize, Serialize};

use super::PropertyValue;

/// One (owner, value) pair in the dynamic property store.
///
/// The owner identifier is an opaque string naming the vertex the entry
/// belongs to; entries are compared against a vertex by plain string
/// equality, so callers must keep identifiers unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyEntry {
    pub owner: String,
    pub value: PropertyValue,
}

impl PropertyEntry {
    pub fn new(owner: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self { owner: owner.into(), value: value.into() }
    }
}

/// The property entries attached across all vertices of a graph, in
/// insertion order.
///
/// Not scoped to one vertex until filtered: a formatting pass selects the
/// entries it wants by owner and value tag. The writer only ever borrows
/// this collection; nothing here mutates during a call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicProperties {
    entries: Vec<PropertyEntry>,
}

impl DynamicProperties {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append an entry. Stored order is iteration order.
    pub fn insert(&mut self, owner: impl Into<String>, value: impl Into<PropertyValue>) {
        self.entries.push(PropertyEntry::new(owner, value));
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, owner: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(owner, value);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertyEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a DynamicProperties {
    type Item = &'a PropertyEntry;
    type IntoIter = std::slice::Iter<'a, PropertyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for DynamicProperties
where
    K: Into<String>,
    V: Into<PropertyValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| PropertyEntry::new(k, v)).collect(),
        }
    }
}
