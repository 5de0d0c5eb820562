//! Builds [`ConstantGroup`] trees from parsed constant documents

use crate::constants::model::{ConfigValue, ConstantGroup, ConstantValue};
use crate::error::{DistroError, DistroResult};
use std::collections::HashMap;
use tracing::{debug, info};

/// One parsed input file
#[derive(Debug, Clone)]
pub struct ConstantDocument {
    /// Where the document came from, used in error messages
    pub origin: String,
    pub root: ConfigValue,
}

impl ConstantDocument {
    pub fn new(origin: impl Into<String>, root: ConfigValue) -> Self {
        Self {
            origin: origin.into(),
            root,
        }
    }

    /// Parse a JSON document
    pub fn from_json_str(origin: impl Into<String>, json: &str) -> DistroResult<Self> {
        let origin = origin.into();
        let root = serde_json::from_str(json).map_err(|source| DistroError::Json {
            origin: origin.clone(),
            source,
        })?;
        Ok(Self { origin, root })
    }
}

/// Accumulates top-level groups across documents, rejecting duplicate names
#[derive(Debug, Default)]
pub struct ConstantModelBuilder {
    groups: Vec<ConstantGroup>,
    origins: HashMap<String, String>,
}

impl ConstantModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every top-level group defined by `document`
    pub fn add_document(&mut self, document: &ConstantDocument) -> DistroResult<()> {
        let origin = document.origin.as_str();
        let entries = match &document.root {
            ConfigValue::Map(entries) => entries,
            other => {
                return Err(DistroError::config(
                    origin,
                    "<root>",
                    format!("expected a mapping of group names, found a {}", other.kind()),
                ))
            }
        };

        for (name, body) in entries {
            if let Some(first) = self.origins.get(name) {
                return Err(DistroError::DuplicateGroup {
                    name: name.clone(),
                    first: first.clone(),
                    second: origin.to_string(),
                });
            }

            info!("Building constant group {} from {}", name, origin);
            let group = build_group(origin, name, name, body)?;
            self.origins.insert(name.clone(), origin.to_string());
            self.groups.push(group);
        }

        Ok(())
    }

    pub fn finish(self) -> Vec<ConstantGroup> {
        self.groups
    }
}

/// Build the constant model for a set of documents, in document order
pub fn build_model(documents: &[ConstantDocument]) -> DistroResult<Vec<ConstantGroup>> {
    let mut builder = ConstantModelBuilder::new();
    for document in documents {
        builder.add_document(document)?;
    }
    Ok(builder.finish())
}

fn build_group(
    origin: &str,
    name: &str,
    path: &str,
    body: &ConfigValue,
) -> DistroResult<ConstantGroup> {
    let entries = match body {
        ConfigValue::Map(entries) => entries,
        other => {
            return Err(DistroError::config(
                origin,
                path,
                format!("a constant group must be a mapping, found a {}", other.kind()),
            ))
        }
    };

    let mut group = ConstantGroup::new(name);

    for (key, value) in entries {
        let key_path = format!("{path}.{key}");

        if group.defines(key) {
            return Err(DistroError::config(
                origin,
                key_path,
                "name is defined more than once in the same group",
            ));
        }

        match value {
            ConfigValue::Map(_) => {
                let child = build_group(origin, key, &key_path, value)?;
                group.push_child(child);
            }
            ConfigValue::List(items) => {
                let elements = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| match item {
                        ConfigValue::Scalar(s) => Ok(s.clone()),
                        other => Err(DistroError::config(
                            origin,
                            format!("{key_path}[{i}]"),
                            format!("list elements must be scalars, found a {}", other.kind()),
                        )),
                    })
                    .collect::<DistroResult<Vec<_>>>()?;
                group.push_member(key.as_str(), ConstantValue::List(elements));
            }
            ConfigValue::Scalar(s) => {
                group.push_member(key.as_str(), ConstantValue::Scalar(s.clone()));
            }
            ConfigValue::Null => {
                return Err(DistroError::config(
                    origin,
                    key_path,
                    "null is not a supported constant value",
                ));
            }
        }
    }

    debug!(
        "Built group {} with {} members and {} nested groups",
        path,
        group.members().len(),
        group.children().len()
    );

    Ok(group)
}
