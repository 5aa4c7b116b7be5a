//! Source catalog trait definition

use crate::error::AtlasResult;
use crate::types::{EntityBundle, SearchHit};
use async_trait::async_trait;
use tf_core::registry::ClassificationDef;

/// Source catalog abstraction for Tagferry
///
/// Implementations must be Send + Sync for async operation. The three
/// methods map onto the catalog's typedef, search, and entity-fetch
/// endpoints. No retry policy lives here; a caller wrapping the trait may
/// add one without touching the traversal core.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the global classification type definitions
    async fn classification_typedefs(&self) -> AtlasResult<Vec<ClassificationDef>>;

    /// Search all entities under a root path, consuming pagination eagerly
    async fn search_entities(&self, root_path: &str) -> AtlasResult<Vec<SearchHit>>;

    /// Fetch the full entity record plus its referred-entity side table
    async fn entity_bundle(&self, hit: &SearchHit) -> AtlasResult<EntityBundle>;

    /// Source type identifier for logging
    fn source_type(&self) -> &'static str;
}
