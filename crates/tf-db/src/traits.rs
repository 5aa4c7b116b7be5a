//! SQL runtime trait definition

use crate::error::DbResult;
use async_trait::async_trait;

/// Target SQL runtime abstraction for Tagferry
///
/// Implementations must be Send + Sync for async operation. Each statement
/// is an independent unit; no transactional batching is assumed.
#[async_trait]
pub trait SqlRuntime: Send + Sync {
    /// Execute one fully-formed DDL statement
    async fn execute(&self, statement: &str) -> DbResult<()>;

    /// Runtime type identifier for logging
    fn runtime_type(&self) -> &'static str;
}
