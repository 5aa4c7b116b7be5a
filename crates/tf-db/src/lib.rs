//! tf-db - Target SQL runtime boundary for Tagferry
//!
//! This crate provides the `SqlRuntime` trait, the Databricks statement
//! execution backend, and the `StatementRunner` that owns the ordered
//! statement buffer and the apply/preview mode switch.

pub mod databricks;
pub mod error;
pub mod runner;
pub mod traits;

pub use databricks::DatabricksBackend;
pub use error::{DbError, DbResult};
pub use runner::{RunMode, RunReport, StatementRunner};
pub use traits::SqlRuntime;
