//! Init command implementation - scaffolds a new Tagferry project

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::cli::InitArgs;

/// Execute the init command
pub(crate) async fn execute(args: &InitArgs) -> Result<()> {
    // Reject names that could cause path traversal or confusing directory names
    if args.name.contains('/')
        || args.name.contains('\\')
        || args.name.contains("..")
        || args.name.starts_with('.')
        || args.name.starts_with('-')
    {
        anyhow::bail!(
            "Invalid project name '{}': must not contain '/', '\\', '..', or start with '.' or '-'",
            args.name
        );
    }

    let project_dir = Path::new(&args.name);

    if project_dir.exists() {
        anyhow::bail!(
            "Directory '{}' already exists. Choose a different project name.",
            args.name
        );
    }

    println!("Creating new Tagferry project: {}\n", args.name);

    fs::create_dir_all(project_dir)
        .with_context(|| format!("Failed to create directory: {}", project_dir.display()))?;

    // Generate tagferry.yml
    // Escape YAML special characters in the interpolated name
    let safe_name = args.name.replace('"', "\\\"");
    let config_content = format!(
        r#"name: "{name}"

# Root path in the source catalog under which entities are discovered
root_path: "myserver/sqlpools/pool1"

# Source entity types the traversal acts on. Columns are never listed here;
# they are always processed as children of their table.
# entity_types:
#   - azure_synapse_dedicated_sql_db
#   - azure_synapse_dedicated_sql_schema
#   - azure_synapse_dedicated_sql_table

source:
  endpoint: "https://your-catalog.example.net"
  # Environment variable holding the bearer token; the secret never lives here
  token_env: ATLAS_TOKEN
  page_size: 50

target:
  endpoint: "https://adb-0000000000000000.0.azuredatabricks.net"
  warehouse_id: "your-warehouse-id"
  token_env: DATABRICKS_TOKEN
"#,
        name = safe_name,
    );
    fs::write(project_dir.join("tagferry.yml"), config_content)
        .context("Failed to write tagferry.yml")?;

    // Generate .gitignore
    let gitignore = "migration_results.json\n";
    fs::write(project_dir.join(".gitignore"), gitignore).context("Failed to write .gitignore")?;

    println!("  Created tagferry.yml");
    println!("  Created .gitignore");
    println!();
    println!("Project '{}' initialized successfully!", args.name);
    println!();
    println!("Next steps:");
    println!("  cd {}", args.name);
    println!("  edit tagferry.yml            # point it at your catalog and warehouse");
    println!("  tagferry plan                # preview the statements");
    println!("  tagferry apply               # apply them to the warehouse");

    Ok(())
}
