//! Error types for tf-atlas

use thiserror::Error;

/// Source catalog boundary errors
#[derive(Error, Debug)]
pub enum AtlasError {
    /// Transport failure (A001)
    #[error("[A001] Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success API response (A002)
    #[error("[A002] Catalog API returned {status}: {body}")]
    Api { status: u16, body: String },

    /// Fetch returned an empty entity list (A003)
    #[error("[A003] Entity payload for '{qualified_name}' contains no entities")]
    MissingEntity { qualified_name: String },

    /// Column reference does not resolve to a matching referred entity (A004)
    #[error("[A004] Dangling column reference: {guid}")]
    DanglingReference { guid: String },

    /// Required relationship absent from the entity record (A005)
    #[error("[A005] Entity '{name}' is missing its '{relationship}' relationship")]
    MissingRelationship { name: String, relationship: String },

    /// Token environment variable unset (A006)
    #[error("[A006] Token environment variable '{var}' is not set")]
    TokenMissing { var: String },

    /// Entity type name has no known kind mapping (A007)
    #[error("[A007] Unrecognized source entity type: {type_name}")]
    UnknownEntityType { type_name: String },
}

/// Result type alias for AtlasError
pub type AtlasResult<T> = Result<T, AtlasError>;
