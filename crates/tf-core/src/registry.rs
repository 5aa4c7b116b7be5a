//! Classification registry
//!
//! Maps opaque technical classification names to human-readable display
//! names. Built once per run from the source catalog's type definitions and
//! immutable afterwards.

use crate::error::{CoreError, CoreResult};
use std::collections::HashMap;

/// One classification type definition, lifted out of the source catalog's
/// typedef payload by the boundary client.
#[derive(Debug, Clone)]
pub struct ClassificationDef {
    /// Technical name, unique by source-system contract
    pub name: String,
    /// Explicit display-name option, when the definition carries one
    pub display_name: Option<String>,
    /// Fallback free-text description
    pub description: Option<String>,
}

/// Technical name → display name lookup for classification tags.
#[derive(Debug, Clone, Default)]
pub struct ClassificationRegistry {
    map: HashMap<String, String>,
}

impl ClassificationRegistry {
    /// Build the registry from type definitions.
    ///
    /// Display name = explicit option if present, else the description.
    /// A definition with neither fails the whole build: the run must not
    /// start with classifications it cannot render.
    pub fn build(defs: &[ClassificationDef]) -> CoreResult<Self> {
        let mut map = HashMap::with_capacity(defs.len());
        for def in defs {
            let display = def
                .display_name
                .clone()
                .or_else(|| def.description.clone())
                .ok_or_else(|| CoreError::RegistryBuild {
                    name: def.name.clone(),
                })?;
            map.insert(def.name.clone(), display);
        }
        Ok(Self { map })
    }

    /// Resolve a technical name to its display name.
    ///
    /// Absence means an entity references a classification that was never
    /// declared in the source's global type system, a data-integrity
    /// condition surfaced as an error rather than silently dropped.
    pub fn lookup(&self, technical_name: &str) -> CoreResult<&str> {
        self.map
            .get(technical_name)
            .map(String::as_str)
            .ok_or_else(|| CoreError::UnknownClassification {
                technical_name: technical_name.to_string(),
            })
    }

    /// Iterate over (technical name, display name) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of registered classifications
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
