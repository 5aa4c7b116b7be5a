//! tf-atlas - Source catalog boundary for Tagferry
//!
//! This crate provides the `CatalogSource` trait, the reqwest-backed
//! Atlas-style API client, the wire types its endpoints serve, and the
//! resolver that hydrates wire bundles into domain entities.

pub mod client;
pub mod error;
pub mod resolver;
pub mod traits;
pub mod types;

pub use client::AtlasClient;
pub use error::{AtlasError, AtlasResult};
pub use resolver::{resolve_column, resolve_entity};
pub use traits::CatalogSource;
pub use types::{
    entity_kind_for, EntityBundle, EntityRecord, SearchHit, ENDORSEMENT_TYPE, SYNAPSE_COLUMN_TYPE,
    SYNAPSE_DB_TYPE, SYNAPSE_SCHEMA_TYPE, SYNAPSE_TABLE_TYPE,
};
