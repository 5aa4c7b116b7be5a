//! Execution controller: ordered statement buffer plus a fixed run mode

use crate::error::{DbError, DbResult};
use crate::traits::SqlRuntime;
use serde::Serialize;
use std::sync::Arc;

/// How a finished buffer is disposed of, fixed at construction
pub enum RunMode {
    /// Execute each statement against the injected runtime, in order
    Apply(Arc<dyn SqlRuntime>),
    /// Print the statements without applying anything
    Preview,
}

/// Outcome of one finished run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// "apply" or "preview"
    pub mode: String,
    /// Statements in the buffer
    pub total: usize,
    /// Statements actually executed (always 0 in preview)
    pub applied: usize,
}

/// Owns the append-only statement buffer for one traversal run.
///
/// Statements are immutable once appended and are consumed exactly once
/// by [`StatementRunner::finish`].
pub struct StatementRunner {
    mode: RunMode,
    buffer: Vec<String>,
}

impl StatementRunner {
    /// Create an empty runner in the given mode
    pub fn new(mode: RunMode) -> Self {
        Self {
            mode,
            buffer: Vec::new(),
        }
    }

    /// Append one batch of statements, preserving their order
    pub fn append(&mut self, statements: Vec<String>) {
        self.buffer.extend(statements);
    }

    /// The buffered statements, in application order
    pub fn statements(&self) -> &[String] {
        &self.buffer
    }

    /// Number of buffered statements
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the buffer: apply statements in order, or print them.
    ///
    /// In apply mode the first failure halts the run; statements already
    /// applied stay applied, the rest are never attempted.
    pub async fn finish(self) -> DbResult<RunReport> {
        let total = self.buffer.len();
        match self.mode {
            RunMode::Apply(runtime) => {
                log::info!("Applying {} statements via {}", total, runtime.runtime_type());
                let mut applied = 0;
                for (index, statement) in self.buffer.iter().enumerate() {
                    log::debug!("Applying statement {}/{}", index + 1, total);
                    runtime.execute(statement).await.map_err(|e| match e {
                        DbError::Execution { message } => DbError::Execution {
                            message: format!("statement {}/{}: {}", index + 1, total, message),
                        },
                        other => other,
                    })?;
                    applied += 1;
                }
                Ok(RunReport {
                    mode: "apply".to_string(),
                    total,
                    applied,
                })
            }
            RunMode::Preview => {
                for statement in &self.buffer {
                    println!("{}", statement);
                }
                Ok(RunReport {
                    mode: "preview".to_string(),
                    total,
                    applied: 0,
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
