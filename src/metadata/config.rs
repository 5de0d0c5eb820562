use crate::constants::FlatReferenceTable;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Metadata references grouped by type.
///
/// Types iterate alphabetically; references within a type keep the order in
/// which they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataConfig {
    references: BTreeMap<String, IndexMap<String, String>>,
}

impl MetadataConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reference, replacing any existing uuid for the same type and key
    pub fn add_reference(
        &mut self,
        reference_type: impl Into<String>,
        key: impl Into<String>,
        uuid: impl Into<String>,
    ) -> Option<String> {
        self.references
            .entry(reference_type.into())
            .or_default()
            .insert(key.into(), uuid.into())
    }

    /// Add every reference of one type
    pub fn add_references(&mut self, reference_type: &str, references: IndexMap<String, String>) {
        let entry = self.references.entry(reference_type.to_string()).or_default();
        entry.extend(references);
    }

    pub fn configured_types(&self) -> impl Iterator<Item = &str> + '_ {
        self.references.keys().map(String::as_str)
    }

    pub fn references_by_type(&self, reference_type: &str) -> Option<&IndexMap<String, String>> {
        self.references.get(reference_type)
    }

    pub fn reference_count(&self) -> usize {
        self.references.values().map(IndexMap::len).sum()
    }

    /// Flatten to `prefix + lowercase(type) + "." + key -> uuid`
    pub fn to_properties(&self, prefix: &str) -> FlatReferenceTable {
        let mut table = FlatReferenceTable::new();
        for (reference_type, references) in &self.references {
            let type_prefix = format!("{prefix}{}.", reference_type.to_lowercase());
            for (key, uuid) in references {
                table.insert(format!("{type_prefix}{key}"), uuid.as_str());
            }
        }
        table
    }
}
