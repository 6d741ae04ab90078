//! Design token tables extracted from a Figma file.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;
use std::collections::BTreeMap;
use std::fmt;

use super::normalized::{ResolvedEffect, TypographyCss};

/// Named color, typography, spacing, and effect tokens.
///
/// Recomputed fresh for each generation request; never updated
/// incrementally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokenSet {
    pub colors: BTreeMap<String, String>,
    pub typography: BTreeMap<String, TypographyCss>,
    pub spacing: SpacingScale,
    pub effects: BTreeMap<String, Vec<ResolvedEffect>>,
}

impl DesignTokenSet {
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.typography.is_empty()
            && self.spacing.is_empty()
            && self.effects.is_empty()
    }
}

/// Ordinal spacing tokens (`spacing-1`, `spacing-2`, ...) over the distinct
/// positive spacing values of a document, ascending.
///
/// Serialized as a JSON object in scale order, which `BTreeMap` cannot
/// provide (`spacing-10` sorts before `spacing-2` lexicographically).
#[derive(Debug, Clone, Default)]
pub struct SpacingScale(Vec<(String, Number)>);

impl SpacingScale {
    /// Build the scale from already sorted, deduplicated values.
    pub fn from_sorted_values(values: Vec<Number>) -> Self {
        let entries = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| (format!("spacing-{}", index + 1), value))
            .collect();
        Self(entries)
    }

    pub fn get(&self, name: &str) -> Option<&Number> {
        self.0
            .iter()
            .find(|(token, _)| token == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Number)> {
        self.0.iter()
    }
}

impl Serialize for SpacingScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SpacingScale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScaleVisitor;

        impl<'de> Visitor<'de> for ScaleVisitor {
            type Value = SpacingScale;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of spacing token names to pixel values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, value)) = access.next_entry::<String, Number>()? {
                    entries.push((name, value));
                }
                Ok(SpacingScale(entries))
            }
        }

        deserializer.deserialize_map(ScaleVisitor)
    }
}
