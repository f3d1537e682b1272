//! Per-cell user metadata

use std::collections::btree_map;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use super::value::AttrValue;

/// Key/value metadata attached to a cell
///
/// The grid never interprets tags. Keys are kept in sorted order so that
/// formatting is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tags {
    entries: BTreeMap<String, AttrValue>,
}

impl Tags {
    /// Create an empty tag map
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a tag
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.get(key)
    }

    /// Check if a tag is present
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Set or overwrite a tag, returning the previous value
    pub fn set<K: Into<String>, V: Into<AttrValue>>(&mut self, key: K, value: V) -> Option<AttrValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Merge entries into this map, overwriting existing keys
    pub fn update<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttrValue>,
    {
        for (key, value) in entries {
            self.entries.insert(key.into(), value.into());
        }
    }

    /// Remove a tag; absent keys are ignored
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.entries.remove(key)
    }

    /// Remove every tag
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no tags
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over tags in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, AttrValue> {
        self.entries.iter()
    }

    /// Iterate over tag keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        f.write_str("}")
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Tags {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tags = Tags::new();
        tags.update(iter);
        tags
    }
}

impl<K: Into<String>, V: Into<AttrValue>, const N: usize> From<[(K, V); N]> for Tags {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<BTreeMap<String, AttrValue>> for Tags {
    fn from(entries: BTreeMap<String, AttrValue>) -> Self {
        Self { entries }
    }
}

impl From<HashMap<String, AttrValue>> for Tags {
    fn from(entries: HashMap<String, AttrValue>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<&Tags> for Tags {
    fn from(tags: &Tags) -> Self {
        tags.clone()
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = (&'a String, &'a AttrValue);
    type IntoIter = btree_map::Iter<'a, String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
