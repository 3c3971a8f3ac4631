// src/catalog.rs
// Catalog gateway: read-only client for the remote Star Wars API

use crate::error::{HolocronError, Result};
use crate::store::ItemType;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// Capability the core consumes to read the remote catalog.
///
/// One record per call, no caching, no retries — a transient failure is
/// reported as `Unavailable` and retrying is the caller's decision.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn fetch(&self, item_type: ItemType, item_id: u32) -> Result<Value>;
}

/// HTTP client for the public SWAPI endpoint.
pub struct SwapiClient {
    client: reqwest::Client,
    base_url: String,
}

impl SwapiClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn record_url(&self, item_type: ItemType, item_id: u32) -> String {
        format!("{}/{}/{}/", self.base_url, item_type.endpoint(), item_id)
    }
}

#[async_trait]
impl CatalogGateway for SwapiClient {
    async fn fetch(&self, item_type: ItemType, item_id: u32) -> Result<Value> {
        let url = self.record_url(item_type, item_id);
        debug!(%url, "Fetching catalog record");

        let response = self.client.get(&url).send().await.map_err(|e| {
            HolocronError::Unavailable(format!("request to {url} failed: {e}"))
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(HolocronError::NotFound(format!(
                "{item_type} {item_id} does not exist in the catalog"
            )));
        }
        if !status.is_success() {
            return Err(HolocronError::Unavailable(format!(
                "catalog returned status {status} for {url}"
            )));
        }

        response.json::<Value>().await.map_err(|e| {
            HolocronError::Unavailable(format!("catalog returned an unreadable body: {e}"))
        })
    }
}
