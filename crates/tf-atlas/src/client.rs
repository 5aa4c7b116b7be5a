//! Atlas-style catalog API client backed by reqwest

use crate::error::{AtlasError, AtlasResult};
use crate::traits::CatalogSource;
use crate::types::{EntityBundle, SearchHit, SearchResponse, TypeDefsResponse};
use async_trait::async_trait;
use tf_core::registry::ClassificationDef;
use tf_core::SourceConfig;

/// HTTP client for an Atlas-style catalog service (Purview and compatible)
pub struct AtlasClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
    page_size: usize,
}

impl AtlasClient {
    /// Build a client from config, reading the bearer token from the
    /// environment variable the config names
    pub fn from_config(config: &SourceConfig) -> AtlasResult<Self> {
        let token = std::env::var(&config.token_env).map_err(|_| AtlasError::TokenMissing {
            var: config.token_env.clone(),
        })?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            token,
            page_size: config.page_size,
        })
    }

    /// Convert a non-success response into an API error with its body
    async fn check(response: reqwest::Response) -> AtlasResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AtlasError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl CatalogSource for AtlasClient {
    async fn classification_typedefs(&self) -> AtlasResult<Vec<ClassificationDef>> {
        let url = format!("{}/api/atlas/v2/types/typedefs", self.endpoint);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        let response = Self::check(response).await?;

        let typedefs: TypeDefsResponse = response.json().await?;
        Ok(typedefs
            .classification_defs
            .iter()
            .map(|def| def.to_def())
            .collect())
    }

    async fn search_entities(&self, root_path: &str) -> AtlasResult<Vec<SearchHit>> {
        let url = format!("{}/api/search/query", self.endpoint);
        let mut hits = Vec::new();
        let mut offset = 0usize;

        // Pages are consumed eagerly until a short page signals the end.
        loop {
            log::debug!("POST {} offset={}", url, offset);
            let response = self
                .http
                .post(&url)
                .bearer_auth(&self.token)
                .json(&serde_json::json!({
                    "keywords": root_path,
                    "limit": self.page_size,
                    "offset": offset,
                }))
                .send()
                .await?;
            let response = Self::check(response).await?;

            let page: SearchResponse = response.json().await?;
            let page_len = page.value.len();
            hits.extend(page.value);

            if page_len < self.page_size {
                break;
            }
            offset += page_len;
        }

        Ok(hits)
    }

    async fn entity_bundle(&self, hit: &SearchHit) -> AtlasResult<EntityBundle> {
        let url = format!("{}/api/atlas/v2/entity/bulk", self.endpoint);
        log::debug!("GET {} guid={}", url, hit.id);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[("guid", hit.id.as_str())])
            .send()
            .await?;
        let response = Self::check(response).await?;

        Ok(response.json().await?)
    }

    fn source_type(&self) -> &'static str {
        "atlas"
    }
}
