//! Databricks SQL statement execution backend

use crate::error::{DbError, DbResult};
use crate::traits::SqlRuntime;
use async_trait::async_trait;
use serde::Deserialize;
use tf_core::TargetConfig;

/// Statement execution API response, reduced to what success checking needs
#[derive(Debug, Deserialize)]
struct StatementResponse {
    #[serde(default)]
    status: Option<StatementStatus>,
}

#[derive(Debug, Deserialize)]
struct StatementStatus {
    #[serde(default)]
    state: String,
    #[serde(default)]
    error: Option<StatementError>,
}

#[derive(Debug, Deserialize)]
struct StatementError {
    #[serde(default)]
    message: String,
}

/// SQL runtime backed by the Databricks statement execution API
pub struct DatabricksBackend {
    http: reqwest::Client,
    endpoint: String,
    warehouse_id: String,
    token: String,
}

impl DatabricksBackend {
    /// Build a backend from config, reading the bearer token from the
    /// environment variable the config names
    pub fn from_config(config: &TargetConfig) -> DbResult<Self> {
        let token = std::env::var(&config.token_env).map_err(|_| DbError::TokenMissing {
            var: config.token_env.clone(),
        })?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            warehouse_id: config.warehouse_id.clone(),
            token,
        })
    }
}

#[async_trait]
impl SqlRuntime for DatabricksBackend {
    async fn execute(&self, statement: &str) -> DbResult<()> {
        let url = format!("{}/api/2.0/sql/statements", self.endpoint);
        log::debug!("POST {} statement={}", url, statement);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({
                "statement": statement,
                "warehouse_id": self.warehouse_id,
                "wait_timeout": "30s",
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DbError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let result: StatementResponse = response.json().await?;
        match result.status {
            Some(status) if status.state == "SUCCEEDED" => Ok(()),
            Some(status) => Err(DbError::Execution {
                message: status
                    .error
                    .map(|e| e.message)
                    .unwrap_or_else(|| format!("statement finished in state {}", status.state)),
            }),
            None => Err(DbError::Execution {
                message: "statement response carried no status".to_string(),
            }),
        }
    }

    fn runtime_type(&self) -> &'static str {
        "databricks"
    }
}
