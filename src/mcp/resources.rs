// src/mcp/resources.rs
// MCP Resource handlers — catalog records addressed as swapi:// URIs

use super::HolocronServer;
use rmcp::{
    model::{
        AnnotateAble, Annotated, ListResourceTemplatesResult, ListResourcesResult,
        PaginatedRequestParams, RawResourceTemplate, ReadResourceRequestParams,
        ReadResourceResult, ResourceContents,
    },
    service::{RequestContext, RoleServer},
};

const URI_SCHEME: &str = "swapi://";

/// Helper to wrap a raw template without annotations.
fn no_ann<T: AnnotateAble>(raw: T) -> Annotated<T> {
    Annotated::new(raw, None)
}

/// Parse a `swapi://{item_type}/{item_id}` URI into its two segments.
///
/// Only the shape is checked here; whether the type is known and the id in
/// range is the dispatch layer's call.
fn parse_uri(uri: &str) -> Result<(&str, u32), rmcp::ErrorData> {
    let rest = uri.strip_prefix(URI_SCHEME).ok_or_else(|| {
        rmcp::ErrorData::invalid_params(format!("Unknown resource URI scheme: {uri}"), None)
    })?;

    let (item_type, id_str) = rest.split_once('/').ok_or_else(|| {
        rmcp::ErrorData::invalid_params(
            format!("Expected swapi://{{item_type}}/{{item_id}}, got: {uri}"),
            None,
        )
    })?;

    let item_id: u32 = id_str.trim_end_matches('/').parse().map_err(|_| {
        rmcp::ErrorData::invalid_params(format!("Invalid item id in URI: {uri}"), None)
    })?;

    Ok((item_type, item_id))
}

impl HolocronServer {
    /// Build the list of resource templates, one per item type.
    fn resource_template_list() -> Vec<Annotated<RawResourceTemplate>> {
        let entries = [
            ("person", "A character from the Star Wars films"),
            ("planet", "A planet from the Star Wars universe"),
            ("starship", "A starship from the Star Wars films"),
            ("film", "A Star Wars film"),
        ];
        entries
            .into_iter()
            .map(|(kind, description)| {
                no_ann(RawResourceTemplate {
                    uri_template: format!("swapi://{kind}/{{item_id}}"),
                    name: format!("{kind}-record"),
                    title: Some(format!("Star Wars {kind}")),
                    description: Some(description.into()),
                    mime_type: Some("application/json".into()),
                    icons: None,
                })
            })
            .collect()
    }

    /// Handle `resources/list`. Every resource is parameterized, so the
    /// concrete list is empty and clients discover records via templates.
    pub(super) async fn handle_list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, rmcp::ErrorData> {
        Ok(ListResourcesResult {
            resources: Vec::new(),
            next_cursor: None,
            meta: None,
        })
    }

    /// Handle `resources/templates/list`.
    pub(super) async fn handle_list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, rmcp::ErrorData> {
        Ok(ListResourceTemplatesResult {
            resource_templates: Self::resource_template_list(),
            next_cursor: None,
            meta: None,
        })
    }

    /// Handle `resources/read`: fetch one catalog record.
    pub(super) async fn handle_read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, rmcp::ErrorData> {
        let (item_type, item_id) = parse_uri(&request.uri)?;

        let envelope = self.dispatcher.fetch_record(item_type, item_id).await;
        if !envelope.ok {
            let detail = envelope.error_detail.unwrap_or_else(|| "fetch failed".into());
            return match envelope.error_kind {
                Some("validation_error") | Some("not_found") => {
                    Err(rmcp::ErrorData::invalid_params(detail, None))
                }
                _ => Err(rmcp::ErrorData::internal_error(detail, None)),
            };
        }

        let json = envelope
            .data
            .map(|record| serde_json::to_string_pretty(&record).unwrap_or_else(|_| "{}".into()))
            .unwrap_or_else(|| "{}".into());

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: request.uri,
                mime_type: Some("application/json".into()),
                text: json,
                meta: None,
            }],
        })
    }
}
