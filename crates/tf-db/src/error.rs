//! Error types for tf-db

use thiserror::Error;

/// Target SQL runtime errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Transport failure (D001)
    #[error("[D001] Warehouse request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Statement rejected by the runtime (D002)
    #[error("[D002] Statement execution failed: {message}")]
    Execution { message: String },

    /// Non-success API response (D003)
    #[error("[D003] Warehouse API returned {status}: {body}")]
    Api { status: u16, body: String },

    /// Token environment variable unset (D004)
    #[error("[D004] Token environment variable '{var}' is not set")]
    TokenMissing { var: String },
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;
