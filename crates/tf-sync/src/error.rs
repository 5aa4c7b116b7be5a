//! Error types for tf-sync

use thiserror::Error;

/// Traversal errors, wrapping the boundary and core error types
#[derive(Error, Debug)]
pub enum SyncError {
    /// Core error (registry build, synthesis, config)
    #[error(transparent)]
    Core(#[from] tf_core::CoreError),

    /// Source catalog error
    #[error(transparent)]
    Atlas(#[from] tf_atlas::AtlasError),

    /// Target runtime error
    #[error(transparent)]
    Db(#[from] tf_db::DbError),
}

/// Result type alias for SyncError
pub type SyncResult<T> = Result<T, SyncError>;
