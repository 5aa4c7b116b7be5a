//! Configuration types and parsing for tagferry.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main project configuration from tagferry.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Migration name, used in logs and result files
    pub name: String,

    /// Root path in the source catalog under which entities are discovered
    pub root_path: String,

    /// Source entity type names the traversal acts on.
    ///
    /// Columns are never listed here; they are always processed as children
    /// of their table.
    #[serde(default = "default_entity_types")]
    pub entity_types: Vec<String>,

    /// Source catalog connection
    pub source: SourceConfig,

    /// Target SQL warehouse connection
    pub target: TargetConfig,
}

/// Source catalog (Atlas-style API) connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Base URL of the catalog service
    pub endpoint: String,

    /// Name of the environment variable holding the bearer token.
    /// The secret itself never lives in config.
    #[serde(default = "default_source_token_env")]
    pub token_env: String,

    /// Search page size
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

/// Target SQL warehouse connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    /// Workspace base URL
    pub endpoint: String,

    /// SQL warehouse to execute statements on
    pub warehouse_id: String,

    /// Name of the environment variable holding the bearer token
    #[serde(default = "default_target_token_env")]
    pub token_env: String,
}

fn default_entity_types() -> Vec<String> {
    vec![
        "azure_synapse_dedicated_sql_db".to_string(),
        "azure_synapse_dedicated_sql_schema".to_string(),
        "azure_synapse_dedicated_sql_table".to_string(),
    ]
}

fn default_source_token_env() -> String {
    "ATLAS_TOKEN".to_string()
}

fn default_target_token_env() -> String {
    "DATABRICKS_TOKEN".to_string()
}

fn default_page_size() -> usize {
    50
}

impl Config {
    /// Load and validate configuration from a YAML file
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> CoreResult<Self> {
        let config: Config =
            serde_yaml::from_str(content).map_err(|e| CoreError::ConfigParseError {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field values after parsing
    fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "'name' must not be empty".to_string(),
            });
        }
        if self.root_path.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "'root_path' must not be empty".to_string(),
            });
        }
        if self.entity_types.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "'entity_types' must list at least one type".to_string(),
            });
        }
        if self.source.endpoint.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "'source.endpoint' must not be empty".to_string(),
            });
        }
        if self.target.endpoint.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "'target.endpoint' must not be empty".to_string(),
            });
        }
        if self.target.warehouse_id.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "'target.warehouse_id' must not be empty".to_string(),
            });
        }
        if self.source.page_size == 0 {
            return Err(CoreError::ConfigInvalid {
                message: "'source.page_size' must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
