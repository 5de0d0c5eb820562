//! Insertion-ordered table of flattened constant references

use indexmap::IndexMap;
use serde::Serialize;

/// Mapping from dotted path (`Program.HIV`) to resolved value.
///
/// Iteration follows insertion order. Re-inserting a key replaces its value in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlatReferenceTable {
    entries: IndexMap<String, String>,
}

impl FlatReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous one for the same path
    pub fn insert(&mut self, path: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(path.into(), value.into())
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// One `key=value` line per entry
    pub fn to_properties_string(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlatReferenceTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (k, v) in iter {
            table.insert(k, v);
        }
        table
    }
}
