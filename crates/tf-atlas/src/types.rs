//! Wire types for the Atlas-style catalog API
//!
//! These mirror the JSON payloads of the typedef, search, and entity-fetch
//! endpoints. Unknown fields are ignored; absent collections default to
//! empty so sparse records deserialize cleanly.

use serde::Deserialize;
use std::collections::HashMap;
use tf_core::registry::ClassificationDef;
use tf_core::EntityKind;

/// Distinguished endorsement classification: carries its own literal tag
/// value and bypasses the registry.
pub const ENDORSEMENT_TYPE: &str = "MICROSOFT.POWERBI.ENDORSEMENT";

/// Source type name for dedicated SQL pool databases
pub const SYNAPSE_DB_TYPE: &str = "azure_synapse_dedicated_sql_db";
/// Source type name for dedicated SQL pool schemas
pub const SYNAPSE_SCHEMA_TYPE: &str = "azure_synapse_dedicated_sql_schema";
/// Source type name for dedicated SQL pool tables
pub const SYNAPSE_TABLE_TYPE: &str = "azure_synapse_dedicated_sql_table";
/// Source type name for dedicated SQL pool columns
pub const SYNAPSE_COLUMN_TYPE: &str = "azure_synapse_dedicated_sql_column";

/// Map a source entity type name onto the kind its statements target
pub fn entity_kind_for(type_name: &str) -> Option<EntityKind> {
    match type_name {
        SYNAPSE_DB_TYPE => Some(EntityKind::Catalog),
        SYNAPSE_SCHEMA_TYPE => Some(EntityKind::Schema),
        SYNAPSE_TABLE_TYPE => Some(EntityKind::Table),
        SYNAPSE_COLUMN_TYPE => Some(EntityKind::Column),
        _ => None,
    }
}

/// Response of the global typedefs endpoint, reduced to classifications
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefsResponse {
    /// Classification type definitions
    #[serde(default)]
    pub classification_defs: Vec<ClassificationTypeDef>,
}

/// One classification type definition as the API serves it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationTypeDef {
    /// Technical name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Optional options bag holding the display name
    #[serde(default)]
    pub options: Option<TypeDefOptions>,
}

/// Options bag on a classification typedef
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefOptions {
    /// Human-readable display name
    #[serde(default)]
    pub display_name: Option<String>,
}

impl ClassificationTypeDef {
    /// Flatten the wire shape into the registry's input form
    pub fn to_def(&self) -> ClassificationDef {
        ClassificationDef {
            name: self.name.clone(),
            display_name: self.options.as_ref().and_then(|o| o.display_name.clone()),
            description: self.description.clone(),
        }
    }
}

/// One search result page
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Hits in this page
    #[serde(default)]
    pub value: Vec<SearchHit>,
}

/// One entity reference from the search endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// Entity guid
    pub id: String,
    /// Slash-delimited qualified name
    pub qualified_name: String,
    /// Source entity type name
    pub entity_type: String,
}

/// Fetched entity plus its referred-entity side table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityBundle {
    /// Requested entities (first is the root)
    #[serde(default)]
    pub entities: Vec<EntityRecord>,
    /// Entities reachable only through relationship references, keyed by guid
    #[serde(default)]
    pub referred_entities: HashMap<String, EntityRecord>,
}

/// One entity record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRecord {
    /// Entity guid
    pub guid: String,
    /// Source entity type name
    pub type_name: String,
    /// Scalar attributes
    #[serde(default)]
    pub attributes: EntityAttributes,
    /// Free-form label strings
    #[serde(default)]
    pub labels: Vec<String>,
    /// Classifications in source order
    #[serde(default)]
    pub classifications: Vec<ClassificationRecord>,
    /// Relationship references
    #[serde(default)]
    pub relationship_attributes: RelationshipAttributes,
}

/// Scalar entity attributes
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityAttributes {
    /// Bare object name
    #[serde(default)]
    pub name: String,
    /// Slash-delimited qualified name
    #[serde(default)]
    pub qualified_name: String,
    /// Business description, possibly markup-laden
    #[serde(default)]
    pub user_description: Option<String>,
}

/// Relationship references on an entity
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipAttributes {
    /// Owning database, for schema entities
    #[serde(default)]
    pub db: Option<RelatedObject>,
    /// Column references, for table entities, in source order
    #[serde(default)]
    pub columns: Vec<ObjectRef>,
}

/// A resolved relationship endpoint with its display text
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedObject {
    /// Display name of the related entity
    #[serde(default)]
    pub display_text: String,
}

/// A bare reference to another entity
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectRef {
    /// Referred entity guid
    pub guid: String,
}

/// One classification attached to an entity
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationRecord {
    /// Classification type name
    pub type_name: String,
    /// Classification attributes
    #[serde(default)]
    pub attributes: ClassificationAttributes,
}

/// Attributes carried by a classification instance
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationAttributes {
    /// Endorsement literal, on the endorsement classification only
    #[serde(default)]
    pub endorsement: Option<String>,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
