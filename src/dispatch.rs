// src/dispatch.rs
// Dispatch layer: validates operations and routes them to the catalog
// gateway or the favorites store, shaping every outcome into one envelope

use crate::catalog::CatalogGateway;
use crate::error::{HolocronError, Result};
use crate::store::{FavoritesStore, ItemType};
use serde::Serialize;
use serde_json::{Value, json};
use std::str::FromStr;
use std::sync::Arc;

/// Uniform response envelope.
///
/// Every dispatch operation resolves to exactly one of these; typed errors
/// never cross above this layer. `retryable` is only present (and true)
/// for transient catalog failures.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retryable: Option<bool>,
}

impl Envelope {
    pub fn success(data: Value) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error_kind: None,
            error_detail: None,
            retryable: None,
        }
    }

    pub fn failure(err: &HolocronError) -> Self {
        Self {
            ok: false,
            data: None,
            error_kind: Some(err.kind()),
            error_detail: Some(err.to_string()),
            retryable: err.retryable().then_some(true),
        }
    }

    fn from_result(result: Result<Value>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self::failure(&err),
        }
    }

    /// Serialized form handed to the protocol adapter.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|_| r#"{"ok":false,"error_kind":"internal"}"#.to_string())
    }
}

/// Stateless router over the two backends.
///
/// Owns nothing but handles; catalog reads never touch the store and store
/// operations never touch the network, so a slow remote cannot starve
/// local mutations.
#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<FavoritesStore>,
    catalog: Arc<dyn CatalogGateway>,
}

impl Dispatcher {
    pub fn new(store: Arc<FavoritesStore>, catalog: Arc<dyn CatalogGateway>) -> Self {
        Self { store, catalog }
    }

    fn parse_item_type(raw: &str) -> Result<ItemType> {
        ItemType::from_str(raw).map_err(|_| {
            HolocronError::Validation(format!(
                "unknown item type '{raw}' (expected person, planet, starship or film)"
            ))
        })
    }

    /// Reject malformed ids before any network call.
    fn validate_catalog_id(item_type: ItemType, item_id: u32) -> Result<()> {
        if item_id == 0 {
            return Err(HolocronError::Validation(
                "item_id must be a positive integer".to_string(),
            ));
        }
        if let Some(max) = item_type.max_known_id()
            && item_id > max
        {
            return Err(HolocronError::Validation(format!(
                "{item_type} ids range from 1 to {max}, got {item_id}"
            )));
        }
        Ok(())
    }

    /// Resource read: fetch one catalog record by identity.
    pub async fn fetch_record(&self, item_type: &str, item_id: u32) -> Envelope {
        let result = async {
            let item_type = Self::parse_item_type(item_type)?;
            Self::validate_catalog_id(item_type, item_id)?;
            self.catalog.fetch(item_type, item_id).await
        }
        .await;
        Envelope::from_result(result)
    }

    /// Tool: add a favorite.
    pub async fn add_favorite(
        &self,
        item_type: &str,
        item_id: u32,
        notes: Option<String>,
    ) -> Envelope {
        let result = async {
            let item_type = Self::parse_item_type(item_type)?;
            let favorite = self
                .store
                .add(item_type, item_id, notes.unwrap_or_default())
                .await?;
            Ok(json!({
                "message": format!("Added {item_type} {item_id} to favorites"),
                "favorite": favorite,
            }))
        }
        .await;
        Envelope::from_result(result)
    }

    /// Tool: list favorites, optionally filtered by type.
    pub async fn list_favorites(&self, item_type: Option<&str>) -> Envelope {
        let result = async {
            let filter = match item_type {
                Some(raw) => Some(Self::parse_item_type(raw)?),
                None => None,
            };
            let favorites = self.store.list(filter).await;
            Ok(json!({
                "count": favorites.len(),
                "favorites": favorites,
            }))
        }
        .await;
        Envelope::from_result(result)
    }

    /// Tool: remove a favorite.
    pub async fn remove_favorite(&self, item_type: &str, item_id: u32) -> Envelope {
        let result = async {
            let item_type = Self::parse_item_type(item_type)?;
            self.store.remove(item_type, item_id).await?;
            Ok(json!({
                "message": format!("Removed {item_type} {item_id} from favorites"),
            }))
        }
        .await;
        Envelope::from_result(result)
    }

    /// Tool: replace the notes of a favorite.
    pub async fn update_favorite_notes(
        &self,
        item_type: &str,
        item_id: u32,
        notes: String,
    ) -> Envelope {
        let result = async {
            let item_type = Self::parse_item_type(item_type)?;
            let favorite = self.store.update_notes(item_type, item_id, notes).await?;
            Ok(json!({
                "message": format!("Updated notes for {item_type} {item_id}"),
                "favorite": favorite,
            }))
        }
        .await;
        Envelope::from_result(result)
    }

    /// Tool: search favorites by notes content.
    pub async fn search_favorites(&self, query: &str) -> Envelope {
        let matches = self.store.search(query).await;
        Envelope::success(json!({
            "query": query,
            "count": matches.len(),
            "matches": matches,
        }))
    }
}
