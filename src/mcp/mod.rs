// src/mcp/mod.rs
// MCP server: tool surface over the dispatch layer

mod handler;
mod prompts;
mod resources;

use crate::dispatch::Dispatcher;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    schemars, tool, tool_router,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddFavoriteRequest {
    #[schemars(description = "Kind of item: person, planet, starship or film")]
    pub item_type: String,
    #[schemars(description = "Numeric id of the item")]
    pub item_id: u32,
    #[schemars(description = "Optional notes about why this item is a favorite")]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListFavoritesRequest {
    #[schemars(description = "Only list favorites of this type (person, planet, starship, film)")]
    pub item_type: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RemoveFavoriteRequest {
    #[schemars(description = "Kind of item: person, planet, starship or film")]
    pub item_type: String,
    #[schemars(description = "Numeric id of the item")]
    pub item_id: u32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateFavoriteNotesRequest {
    #[schemars(description = "Kind of item: person, planet, starship or film")]
    pub item_type: String,
    #[schemars(description = "Numeric id of the item")]
    pub item_id: u32,
    #[schemars(description = "Replacement notes text")]
    pub notes: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchFavoritesRequest {
    #[schemars(description = "Case-insensitive substring to look for in notes")]
    pub query: String,
}

/// MCP server state.
///
/// Holds the dispatcher and nothing else; every protocol surface is a
/// rename/serialization of a dispatch operation.
#[derive(Clone)]
pub struct HolocronServer {
    pub dispatcher: Dispatcher,
    tool_router: ToolRouter<Self>,
}

impl HolocronServer {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl HolocronServer {
    #[tool(description = "Add a Star Wars item to your favorites, with optional notes.")]
    async fn add_favorite(
        &self,
        Parameters(req): Parameters<AddFavoriteRequest>,
    ) -> Result<String, String> {
        Ok(self
            .dispatcher
            .add_favorite(&req.item_type, req.item_id, req.notes)
            .await
            .to_json())
    }

    #[tool(description = "List saved favorites, optionally filtered by item type.")]
    async fn list_favorites(
        &self,
        Parameters(req): Parameters<ListFavoritesRequest>,
    ) -> Result<String, String> {
        Ok(self
            .dispatcher
            .list_favorites(req.item_type.as_deref())
            .await
            .to_json())
    }

    #[tool(description = "Remove an item from your favorites.")]
    async fn remove_favorite(
        &self,
        Parameters(req): Parameters<RemoveFavoriteRequest>,
    ) -> Result<String, String> {
        Ok(self
            .dispatcher
            .remove_favorite(&req.item_type, req.item_id)
            .await
            .to_json())
    }

    #[tool(description = "Replace the notes on an existing favorite.")]
    async fn update_favorite_notes(
        &self,
        Parameters(req): Parameters<UpdateFavoriteNotesRequest>,
    ) -> Result<String, String> {
        Ok(self
            .dispatcher
            .update_favorite_notes(&req.item_type, req.item_id, req.notes)
            .await
            .to_json())
    }

    #[tool(description = "Search favorites by notes content (case-insensitive substring).")]
    async fn search_favorites(
        &self,
        Parameters(req): Parameters<SearchFavoritesRequest>,
    ) -> Result<String, String> {
        Ok(self.dispatcher.search_favorites(&req.query).await.to_json())
    }
}
