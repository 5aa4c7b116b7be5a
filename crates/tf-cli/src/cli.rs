//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// Tagferry - migrate catalog metadata into a lakehouse as SQL DDL
#[derive(Parser, Debug)]
#[command(name = "tagferry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override config file path
    #[arg(short, long, global = true, default_value = "tagferry.yml")]
    pub config: String,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new migration project
    Init(InitArgs),

    /// Walk the source catalog and print every statement without applying
    Plan(PlanArgs),

    /// Walk the source catalog and execute every statement on the warehouse
    Apply(ApplyArgs),

    /// Fetch type definitions and print the classification registry
    Classifications,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Name of the project directory to create
    pub name: String,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Write the synthesized statements to a file, one per line
    #[arg(short, long)]
    pub output: Option<String>,

    /// Override the configured root path
    #[arg(short, long)]
    pub root: Option<String>,

    /// Override the configured entity types (comma-separated)
    #[arg(short, long)]
    pub types: Option<String>,
}

/// Arguments for the apply command
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Override the configured root path
    #[arg(short, long)]
    pub root: Option<String>,

    /// Override the configured entity types (comma-separated)
    #[arg(short, long)]
    pub types: Option<String>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
