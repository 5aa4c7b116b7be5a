//! Error types for tf-core

use thiserror::Error;

/// Core error type for Tagferry
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse configuration file
    #[error("[E002] Failed to parse config: {message}")]
    ConfigParseError { message: String },

    /// E003: Invalid configuration value
    #[error("[E003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E004: IO error
    #[error("[E004] IO error: {0}")]
    Io(#[from] std::io::Error),

    // Classification registry error types (R001-R002)
    /// R001: Classification type definition carries neither a display name nor a description
    #[error("[R001] Classification '{name}' has no display name and no description")]
    RegistryBuild { name: String },

    /// R002: Classification referenced by an entity but absent from the registry
    #[error("[R002] Unknown classification '{technical_name}': not declared in the source type system")]
    UnknownClassification { technical_name: String },

    /// P001: Qualified path has too few segments to derive a catalog.schema address
    #[error("[P001] Malformed qualified path '{path}': need at least 3 segments")]
    MalformedPath { path: String },

    /// P002: Schema entity reached synthesis without a resolved parent catalog
    #[error("[P002] Schema '{name}' has no resolved parent catalog")]
    MissingParentCatalog { name: String },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
