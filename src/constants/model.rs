//! Constant model types
//!
//! [`ConfigValue`] is the tagged form of a parsed input document, decoded once
//! at parse time. [`ConstantGroup`] is the tree the builder produces from it and
//! the renderer consumes.

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::fmt;

/// Key serde_json uses to pass a raw number token through `visit_map` when
/// `arbitrary_precision` is enabled
const NUMBER_TOKEN: &str = "$serde_json::private::Number";

/// A parsed value from a constants document.
///
/// Mappings keep their entries in document order, including repeated keys, so
/// that the builder can report them instead of silently keeping the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Scalar(String),
    List(Vec<ConfigValue>),
    Map(Vec<(String, ConfigValue)>),
    Null,
}

impl ConfigValue {
    /// Short name of the value's shape, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::List(_) => "list",
            Self::Map(_) => "mapping",
            Self::Null => "null",
        }
    }
}

impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ConfigValueVisitor)
    }
}

struct ConfigValueVisitor;

impl<'de> Visitor<'de> for ConfigValueVisitor {
    type Value = ConfigValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean, list or mapping")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(ConfigValue::Scalar(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ConfigValue::Scalar(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ConfigValue::Scalar(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(ConfigValue::Scalar(format_float(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ConfigValue::Scalar(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(ConfigValue::Scalar(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ConfigValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ConfigValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        ConfigValue::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(ConfigValue::List(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, ConfigValue>()? {
            entries.push((key, value));
        }

        if let [(key, ConfigValue::Scalar(token))] = entries.as_slice() {
            if key == NUMBER_TOKEN {
                return Ok(ConfigValue::Scalar(format_number_token(token)));
            }
        }
        Ok(ConfigValue::Map(entries))
    }
}

/// Integers keep their literal digits whatever their size; fractions and
/// exponents go through [`format_float`]
fn format_number_token(token: &str) -> String {
    if token.contains(['.', 'e', 'E']) {
        match token.parse::<f64>() {
            Ok(v) => format_float(v),
            Err(_) => token.to_string(),
        }
    } else {
        match token.parse::<i64>() {
            Ok(v) => v.to_string(),
            Err(_) => token.to_string(),
        }
    }
}

/// Floats always keep a fractional digit so `1.0` stays `1.0` in generated code
fn format_float(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}

/// Value of a non-group member
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstantValue {
    Scalar(String),
    List(Vec<String>),
}

/// A named group of constants, rendered as one (possibly nested) class.
///
/// Scalar and list members share one ordered sequence: the relative order of
/// scalars and lists matters when list elements are resolved against
/// previously flattened constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantGroup {
    name: String,
    members: Vec<(String, ConstantValue)>,
    children: Vec<ConstantGroup>,
}

impl ConstantGroup {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scalar and list members in input order
    pub fn members(&self) -> &[(String, ConstantValue)] {
        &self.members
    }

    pub fn children(&self) -> &[ConstantGroup] {
        &self.children
    }

    pub fn scalars(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.members.iter().filter_map(|(name, value)| match value {
            ConstantValue::Scalar(v) => Some((name.as_str(), v.as_str())),
            ConstantValue::List(_) => None,
        })
    }

    pub fn lists(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.members.iter().filter_map(|(name, value)| match value {
            ConstantValue::List(items) => Some((name.as_str(), items.as_slice())),
            ConstantValue::Scalar(_) => None,
        })
    }

    pub fn child(&self, name: &str) -> Option<&ConstantGroup> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Whether `name` is already used by a member or a child group
    pub fn defines(&self, name: &str) -> bool {
        self.members.iter().any(|(n, _)| n == name) || self.children.iter().any(|c| c.name == name)
    }

    pub(crate) fn push_member(&mut self, name: impl Into<String>, value: ConstantValue) {
        self.members.push((name.into(), value));
    }

    pub(crate) fn push_child(&mut self, child: ConstantGroup) {
        self.children.push(child);
    }

    /// Number of scalar and list members in this group and all descendants
    pub fn constant_count(&self) -> usize {
        self.members.len()
            + self
                .children
                .iter()
                .map(ConstantGroup::constant_count)
                .sum::<usize>()
    }
}
