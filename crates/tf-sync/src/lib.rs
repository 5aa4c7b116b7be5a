//! tf-sync - Traversal driver for Tagferry
//!
//! Orchestrates one migration run: registry build, search-result walk,
//! per-entity resolution and synthesis, and the single hand-off of the
//! statement buffer to the runner.

pub mod driver;
pub mod error;

pub use driver::{run, RunSummary};
pub use error::{SyncError, SyncResult};
