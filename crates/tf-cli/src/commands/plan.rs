//! Plan command implementation - full traversal in preview mode

use anyhow::{Context, Result};
use tf_atlas::AtlasClient;
use tf_db::{RunMode, StatementRunner};

use crate::cli::{GlobalArgs, PlanArgs};
use crate::context::RuntimeContext;

/// Execute the plan command
pub(crate) async fn execute(args: &PlanArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let root = ctx.effective_root(&args.root).to_string();
    let types = ctx.effective_types(&args.types);
    ctx.verbose(&format!(
        "Planning under '{}' for {} entity types",
        root,
        types.len()
    ));

    let source = AtlasClient::from_config(&ctx.config.source)
        .context("Failed to build source catalog client")?;
    let runner = StatementRunner::new(RunMode::Preview);

    let summary = tf_sync::run(&source, &root, &types, runner)
        .await
        .context("Traversal failed")?;

    if let Some(output) = &args.output {
        let mut content = summary.statements.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        std::fs::write(output, content)
            .with_context(|| format!("Failed to write {}", output))?;
        println!();
        println!("Wrote {} statements to {}", summary.statements.len(), output);
    }

    println!();
    println!(
        "Plan complete: {} entities processed, {} skipped, {} failed, {} statements",
        summary.processed,
        summary.skipped,
        summary.failed,
        summary.statements.len()
    );

    Ok(())
}
