//! Domain model for source-catalog entities
//!
//! Entities are built fresh from API responses during a traversal and
//! discarded after statement synthesis; nothing here is persisted.

use crate::error::{CoreError, CoreResult};
use std::fmt;

/// Kind of object a statement targets, named by its DDL keyword.
///
/// The source catalog's database kind maps to `Catalog` because the target
/// lakehouse addresses it with `ALTER CATALOG` / `COMMENT ON CATALOG`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Top-level catalog (source database)
    Catalog,
    /// Schema within a catalog
    Schema,
    /// Table within a schema
    Table,
    /// Column within a table
    Column,
}

impl EntityKind {
    /// DDL keyword used in `ALTER <kw>` / `COMMENT ON <kw>` statements
    pub fn ddl_keyword(&self) -> &'static str {
        match self {
            EntityKind::Catalog => "CATALOG",
            EntityKind::Schema => "SCHEMA",
            EntityKind::Table => "TABLE",
            EntityKind::Column => "COLUMN",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ddl_keyword())
    }
}

/// A sensitivity/category tag attached to an entity.
///
/// Generic classifications are opaque technical names resolved to display
/// names through the [`crate::registry::ClassificationRegistry`]. The
/// endorsement classification is distinguished: it carries its own literal
/// value and never goes through the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationRef {
    /// Registry-resolved classification
    Generic {
        /// Technical name as declared in the source type system
        technical_name: String,
    },
    /// Endorsement carrying its literal tag value
    Endorsement {
        /// Literal value, used verbatim as the tag
        value: String,
    },
}

/// A node in the source catalog's metadata graph, fully hydrated.
#[derive(Debug, Clone)]
pub struct CatalogEntity {
    /// What the entity is
    pub kind: EntityKind,
    /// Bare object name
    pub name: String,
    /// Slash-delimited location string encoding ancestry
    pub qualified_path: String,
    /// Free-text business description, possibly markup-laden
    pub description: Option<String>,
    /// Free-form string tags, independent of the classification system
    pub labels: Vec<String>,
    /// Classification references in source order
    pub classifications: Vec<ClassificationRef>,
    /// Resolved child columns in relationship order (tables only)
    pub columns: Vec<CatalogEntity>,
    /// Display name of the owning catalog (schemas only, from a resolved
    /// relationship, not from path parsing)
    pub parent_catalog: Option<String>,
}

impl CatalogEntity {
    /// Construct an entity with no labels, classifications, or children
    pub fn new(kind: EntityKind, name: impl Into<String>, qualified_path: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            qualified_path: qualified_path.into(),
            description: None,
            labels: Vec::new(),
            classifications: Vec::new(),
            columns: Vec::new(),
            parent_catalog: None,
        }
    }
}

/// Target `catalog.schema` address derived from a qualified path.
///
/// The source path format places the owning catalog and schema as the
/// third- and second-from-last segments before the entity name. This is a
/// structural invariant of the path format, not free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableAddress {
    /// Target catalog name
    pub catalog: String,
    /// Target schema name
    pub schema: String,
}

impl TableAddress {
    /// Derive the address from a slash-delimited qualified path.
    ///
    /// `"a/b/cat/sch/tbl"` resolves to `cat.sch`. Fails with
    /// [`CoreError::MalformedPath`] when fewer than three segments exist.
    pub fn from_qualified_path(path: &str) -> CoreResult<Self> {
        let segments: Vec<&str> = path.split('/').collect();
        if segments.len() < 3 {
            return Err(CoreError::MalformedPath {
                path: path.to_string(),
            });
        }
        Ok(Self {
            catalog: segments[segments.len() - 3].to_string(),
            schema: segments[segments.len() - 2].to_string(),
        })
    }
}

impl fmt::Display for TableAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.catalog, self.schema)
    }
}

#[cfg(test)]
#[path = "entity_test.rs"]
mod tests;
