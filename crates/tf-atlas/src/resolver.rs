//! Entity resolver: wire bundles into hydrated domain entities

use crate::error::{AtlasError, AtlasResult};
use crate::types::{
    entity_kind_for, ClassificationRecord, EntityBundle, EntityRecord, ObjectRef, SearchHit,
    ENDORSEMENT_TYPE, SYNAPSE_COLUMN_TYPE,
};
use std::collections::HashMap;
use tf_core::{CatalogEntity, ClassificationRef, EntityKind};

/// Hydrate the root entity of a fetched bundle into a [`CatalogEntity`].
///
/// Schemas must carry their catalog relationship; tables get their columns
/// resolved through the referred-entity side table. A dangling column
/// reference is logged and skipped, never fatal to the table.
pub fn resolve_entity(hit: &SearchHit, bundle: &EntityBundle) -> AtlasResult<CatalogEntity> {
    let root = bundle
        .entities
        .first()
        .ok_or_else(|| AtlasError::MissingEntity {
            qualified_name: hit.qualified_name.clone(),
        })?;

    let kind = entity_kind_for(&root.type_name).ok_or_else(|| AtlasError::UnknownEntityType {
        type_name: root.type_name.clone(),
    })?;

    let mut entity = hydrate_record(root, kind);

    match kind {
        EntityKind::Schema => {
            let db = root.relationship_attributes.db.as_ref().ok_or_else(|| {
                AtlasError::MissingRelationship {
                    name: entity.name.clone(),
                    relationship: "db".to_string(),
                }
            })?;
            entity.parent_catalog = Some(db.display_text.clone());
        }
        EntityKind::Table => {
            for column_ref in &root.relationship_attributes.columns {
                match resolve_column(column_ref, &bundle.referred_entities) {
                    Ok(column) => entity.columns.push(column),
                    Err(e) => {
                        log::warn!("Skipping column of table '{}': {}", entity.name, e);
                    }
                }
            }
        }
        EntityKind::Catalog | EntityKind::Column => {}
    }

    Ok(entity)
}

/// Resolve one column reference through the referred-entity side table.
///
/// The resolved record must carry the same guid as the lookup key and the
/// column type name; anything else is a dangling reference.
pub fn resolve_column(
    column_ref: &ObjectRef,
    referred_entities: &HashMap<String, EntityRecord>,
) -> AtlasResult<CatalogEntity> {
    let record = referred_entities
        .get(&column_ref.guid)
        .filter(|record| record.guid == column_ref.guid && record.type_name == SYNAPSE_COLUMN_TYPE)
        .ok_or_else(|| AtlasError::DanglingReference {
            guid: column_ref.guid.clone(),
        })?;

    Ok(hydrate_record(record, EntityKind::Column))
}

/// Copy the scalar parts of a wire record into a domain entity
fn hydrate_record(record: &EntityRecord, kind: EntityKind) -> CatalogEntity {
    let mut entity = CatalogEntity::new(
        kind,
        record.attributes.name.clone(),
        record.attributes.qualified_name.clone(),
    );
    entity.description = record.attributes.user_description.clone();
    entity.labels = record.labels.clone();
    entity.classifications = record
        .classifications
        .iter()
        .map(classification_ref)
        .collect();
    entity
}

/// Map a classification record onto its domain reference.
///
/// The endorsement classification carries its literal value; a missing
/// value degrades to the empty string rather than failing the entity.
fn classification_ref(record: &ClassificationRecord) -> ClassificationRef {
    if record.type_name == ENDORSEMENT_TYPE {
        ClassificationRef::Endorsement {
            value: record.attributes.endorsement.clone().unwrap_or_default(),
        }
    } else {
        ClassificationRef::Generic {
            technical_name: record.type_name.clone(),
        }
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
