//! Apply command implementation - full traversal against the warehouse

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tf_atlas::AtlasClient;
use tf_db::{DatabricksBackend, RunMode, RunReport, StatementRunner};

use crate::cli::{ApplyArgs, GlobalArgs};
use crate::context::RuntimeContext;

/// Migration results output file format
#[derive(Debug, Serialize)]
struct MigrationResults {
    timestamp: DateTime<Utc>,
    elapsed_secs: f64,
    name: String,
    root_path: String,
    processed: usize,
    skipped: usize,
    failed: usize,
    report: RunReport,
}

/// Execute the apply command
pub(crate) async fn execute(args: &ApplyArgs, global: &GlobalArgs) -> Result<()> {
    let start_time = Instant::now();
    let ctx = RuntimeContext::new(global)?;
    let root = ctx.effective_root(&args.root).to_string();
    let types = ctx.effective_types(&args.types);
    ctx.verbose(&format!(
        "Applying under '{}' for {} entity types",
        root,
        types.len()
    ));

    let source = AtlasClient::from_config(&ctx.config.source)
        .context("Failed to build source catalog client")?;
    let runtime = Arc::new(
        DatabricksBackend::from_config(&ctx.config.target)
            .context("Failed to build warehouse client")?,
    );
    let runner = StatementRunner::new(RunMode::Apply(runtime));

    println!("Applying metadata from '{}'...\n", root);

    let summary = tf_sync::run(&source, &root, &types, runner)
        .await
        .context("Migration run failed")?;

    let results = MigrationResults {
        timestamp: Utc::now(),
        elapsed_secs: start_time.elapsed().as_secs_f64(),
        name: ctx.config.name.clone(),
        root_path: root,
        processed: summary.processed,
        skipped: summary.skipped,
        failed: summary.failed,
        report: summary.report,
    };
    let results_json = serde_json::to_string_pretty(&results)
        .context("Failed to serialize migration results")?;
    std::fs::write("migration_results.json", results_json)
        .context("Failed to write migration_results.json")?;

    println!();
    println!(
        "Completed: {} statements applied, {} entities processed, {} skipped, {} failed",
        results.report.applied, summary.processed, summary.skipped, summary.failed
    );
    println!("Total time: {}ms", start_time.elapsed().as_millis());

    if summary.failed > 0 {
        std::process::exit(4);
    }

    Ok(())
}
