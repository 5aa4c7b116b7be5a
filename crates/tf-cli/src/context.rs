//! Runtime context for CLI commands

use anyhow::{Context, Result};
use std::path::Path;
use tf_core::Config;

use crate::cli::GlobalArgs;

/// Runtime context containing the loaded configuration
pub struct RuntimeContext {
    /// The loaded configuration
    pub config: Config,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        let config = Config::load(Path::new(&args.config))
            .context("Failed to load configuration file")?;
        Ok(Self {
            config,
            verbose: args.verbose,
        })
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }

    /// Root path from the CLI override or the config
    pub fn effective_root<'a>(&'a self, root: &'a Option<String>) -> &'a str {
        root.as_deref().unwrap_or(&self.config.root_path)
    }

    /// Entity types from a comma-separated CLI override or the config
    pub fn effective_types(&self, types: &Option<String>) -> Vec<String> {
        match types {
            Some(types) => types
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => self.config.entity_types.clone(),
        }
    }
}
