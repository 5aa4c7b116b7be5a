//! DDL statement synthesis per entity kind
//!
//! Statement shapes here are the output-format contract: keyword casing,
//! quoting style, and the trailing semicolon are exact. Per entity, the
//! order is fixed: labels, classifications, comment; for tables, container
//! statements precede all column statements, columns in source order.

use tf_core::sanitize::{escape_quotes, strip_markup, tag_token};
use tf_core::{
    CatalogEntity, ClassificationRef, ClassificationRegistry, CoreError, CoreResult, EntityKind,
    TableAddress,
};

/// Synthesize all statements for one entity into the buffer.
///
/// Dispatches on entity kind. A failed synthesis (unknown classification,
/// malformed path) may leave earlier statements in the buffer; callers
/// that need entity-level atomicity synthesize into a scratch buffer and
/// append it only on success.
pub fn synthesize(
    entity: &CatalogEntity,
    registry: &ClassificationRegistry,
    buffer: &mut Vec<String>,
) -> CoreResult<()> {
    match entity.kind {
        EntityKind::Catalog => catalog_statements(entity, registry, buffer),
        EntityKind::Schema => schema_statements(entity, registry, buffer),
        EntityKind::Table => table_statements(entity, registry, buffer),
        // Bare column hits never reach synthesis; columns are emitted by
        // their owning table.
        EntityKind::Column => Ok(()),
    }
}

/// Catalog statements: the address is the bare catalog name
fn catalog_statements(
    entity: &CatalogEntity,
    registry: &ClassificationRegistry,
    buffer: &mut Vec<String>,
) -> CoreResult<()> {
    container_statements(entity, &entity.name, registry, buffer)
}

/// Schema statements: the address comes from the resolved catalog
/// relationship, not from path parsing
fn schema_statements(
    entity: &CatalogEntity,
    registry: &ClassificationRegistry,
    buffer: &mut Vec<String>,
) -> CoreResult<()> {
    let parent = entity
        .parent_catalog
        .as_deref()
        .ok_or_else(|| CoreError::MissingParentCatalog {
            name: entity.name.clone(),
        })?;
    let address = format!("{}.{}", parent, entity.name);
    container_statements(entity, &address, registry, buffer)
}

/// Table statements: container statements first, then every resolved
/// column in source order
fn table_statements(
    entity: &CatalogEntity,
    registry: &ClassificationRegistry,
    buffer: &mut Vec<String>,
) -> CoreResult<()> {
    let address = TableAddress::from_qualified_path(&entity.qualified_path)?;
    let table_address = format!("{}.{}", address, entity.name);
    container_statements(entity, &table_address, registry, buffer)?;

    for column in &entity.columns {
        column_statements(column, &table_address, registry, buffer)?;
    }
    Ok(())
}

/// Shared container rule for catalog, schema, and table entities.
///
/// Generic classifications merge into one tag with a comma-joined value;
/// each endorsement is its own statement. The comment is always emitted,
/// even for an empty description (columns differ, see below).
fn container_statements(
    entity: &CatalogEntity,
    address: &str,
    registry: &ClassificationRegistry,
    buffer: &mut Vec<String>,
) -> CoreResult<()> {
    let keyword = entity.kind.ddl_keyword();

    if !entity.labels.is_empty() {
        let tags = entity
            .labels
            .iter()
            .map(|label| format!("'{}'", escape_quotes(label)))
            .collect::<Vec<_>>()
            .join(",");
        buffer.push(format!("ALTER {keyword} {address} SET TAGS ({tags});"));
    }

    let mut generic_names = Vec::new();
    for classification in &entity.classifications {
        match classification {
            ClassificationRef::Endorsement { value } => {
                buffer.push(format!("ALTER {keyword} {address} SET TAGS ('{value}');"));
            }
            ClassificationRef::Generic { technical_name } => {
                generic_names.push(escape_quotes(registry.lookup(technical_name)?));
            }
        }
    }
    if !generic_names.is_empty() {
        buffer.push(format!(
            "ALTER {keyword} {address} SET TAGS ('classification' = '{}');",
            generic_names.join(", ")
        ));
    }

    buffer.push(format!(
        "COMMENT ON {keyword} {address} IS \"{}\";",
        strip_markup(entity.description.as_deref())
    ));

    Ok(())
}

/// Column rule: one tag statement per classification, then the comment
/// only when the stripped description is non-empty.
fn column_statements(
    column: &CatalogEntity,
    table_address: &str,
    registry: &ClassificationRegistry,
    buffer: &mut Vec<String>,
) -> CoreResult<()> {
    for classification in &column.classifications {
        match classification {
            // Fixed literal; the endorsement value never feeds column tags.
            ClassificationRef::Endorsement { .. } => {
                buffer.push(format!(
                    "ALTER TABLE {table_address} ALTER COLUMN {} SET TAGS ('Certified');",
                    column.name
                ));
            }
            ClassificationRef::Generic { technical_name } => {
                let display = registry.lookup(technical_name)?;
                buffer.push(format!(
                    "ALTER TABLE {table_address} ALTER COLUMN {} SET TAGS ('Classification' = '{}');",
                    column.name,
                    tag_token(display)
                ));
            }
        }
    }

    let description = strip_markup(column.description.as_deref());
    if !description.is_empty() {
        buffer.push(format!(
            "ALTER TABLE {table_address} ALTER COLUMN {} COMMENT '{}';",
            column.name,
            escape_quotes(&description)
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "synth_test.rs"]
mod tests;
