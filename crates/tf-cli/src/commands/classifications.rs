//! Classifications command implementation - print the registry

use anyhow::{Context, Result};
use tf_atlas::{AtlasClient, CatalogSource};
use tf_core::ClassificationRegistry;

use crate::cli::GlobalArgs;
use crate::context::RuntimeContext;

/// Execute the classifications command
pub(crate) async fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let source = AtlasClient::from_config(&ctx.config.source)
        .context("Failed to build source catalog client")?;

    let defs = source
        .classification_typedefs()
        .await
        .context("Failed to fetch type definitions")?;
    let registry =
        ClassificationRegistry::build(&defs).context("Failed to build classification registry")?;

    let mut rows: Vec<(&str, &str)> = registry.iter().collect();
    rows.sort();

    println!("{} classifications registered:\n", registry.len());
    for (technical_name, display_name) in rows {
        println!("  {:<50} {}", technical_name, display_name);
    }

    Ok(())
}
