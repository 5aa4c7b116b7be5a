//! Traversal driver
//!
//! Walks the source catalog's search results under a root path, resolves
//! and synthesizes each supported entity, and hands the accumulated buffer
//! to the statement runner exactly once after the full walk. Traversal and
//! execution are decoupled: no statement is applied before the walk ends.

use crate::error::SyncResult;
use tf_atlas::{entity_kind_for, resolve_entity, CatalogSource, SearchHit};
use tf_core::{ClassificationRegistry, EntityKind};
use tf_db::{RunReport, StatementRunner};
use tf_ddl::synthesize;

/// Counts and output of one traversal run
#[derive(Debug)]
pub struct RunSummary {
    /// Entities resolved and synthesized
    pub processed: usize,
    /// Hits skipped because their type is unsupported or unrecognized
    pub skipped: usize,
    /// Entities that failed to fetch, resolve, or synthesize
    pub failed: usize,
    /// Every synthesized statement, in application order
    pub statements: Vec<String>,
    /// Disposal report from the runner
    pub report: RunReport,
}

/// Run one full traversal: build the registry, walk the search results,
/// synthesize per entity, then finish the runner.
///
/// A registry build failure aborts before traversal begins. Per-entity
/// failures are logged and counted; the walk continues with the next hit.
pub async fn run(
    source: &dyn CatalogSource,
    root_path: &str,
    supported_types: &[String],
    mut runner: StatementRunner,
) -> SyncResult<RunSummary> {
    log::debug!("Starting traversal against {} source", source.source_type());
    let defs = source.classification_typedefs().await?;
    let registry = ClassificationRegistry::build(&defs)?;
    log::info!(
        "Built classification registry with {} entries",
        registry.len()
    );

    let hits = source.search_entities(root_path).await?;
    log::info!(
        "Search under '{}' returned {} entities",
        root_path,
        hits.len()
    );

    let mut processed = 0;
    let mut skipped = 0;
    let mut failed = 0;

    for hit in &hits {
        if !supported_types.contains(&hit.entity_type) {
            log::info!(
                "Skipping unsupported entity type '{}' ({})",
                hit.entity_type,
                hit.qualified_name
            );
            skipped += 1;
            continue;
        }
        match entity_kind_for(&hit.entity_type) {
            None => {
                log::warn!(
                    "No kind mapping for entity type '{}'; skipping {}",
                    hit.entity_type,
                    hit.qualified_name
                );
                skipped += 1;
                continue;
            }
            Some(EntityKind::Column) => {
                // Columns ride along with their owning table.
                log::info!("Skipping bare column hit {}", hit.qualified_name);
                skipped += 1;
                continue;
            }
            Some(_) => {}
        }

        match process_hit(source, hit, &registry).await {
            Ok(statements) => {
                runner.append(statements);
                processed += 1;
            }
            Err(e) => {
                log::warn!("Failed to process '{}': {}", hit.qualified_name, e);
                failed += 1;
            }
        }
    }

    let statements = runner.statements().to_vec();
    let report = runner.finish().await?;

    Ok(RunSummary {
        processed,
        skipped,
        failed,
        statements,
        report,
    })
}

/// Fetch, resolve, and synthesize one hit into a scratch buffer.
///
/// The scratch buffer keeps entity-level atomicity: on any failure the
/// caller discards it, so a half-synthesized entity never reaches the
/// runner.
async fn process_hit(
    source: &dyn CatalogSource,
    hit: &SearchHit,
    registry: &ClassificationRegistry,
) -> SyncResult<Vec<String>> {
    let bundle = source.entity_bundle(hit).await?;
    let entity = resolve_entity(hit, &bundle)?;

    let mut scratch = Vec::new();
    synthesize(&entity, registry, &mut scratch)?;
    log::debug!(
        "Synthesized {} statements for '{}'",
        scratch.len(),
        hit.qualified_name
    );
    Ok(scratch)
}

#[cfg(test)]
#[path = "driver_test.rs"]
mod tests;
