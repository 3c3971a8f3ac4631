// src/mcp/prompts.rs
// MCP Prompt handlers — workflows exposed as prompts

use super::HolocronServer;
use crate::workflows::{self, WorkflowInfo};
use rmcp::{
    model::{
        GetPromptRequestParams, GetPromptResult, ListPromptsResult, PaginatedRequestParams,
        Prompt, PromptArgument, PromptMessage, PromptMessageRole,
    },
    service::{RequestContext, RoleServer},
};
use serde_json::Value;

fn to_prompt(info: &WorkflowInfo) -> Prompt {
    let arguments = info
        .args
        .iter()
        .map(|arg| PromptArgument {
            name: arg.name.into(),
            title: None,
            description: Some(arg.description.into()),
            required: Some(arg.required),
        })
        .collect();
    Prompt::new(info.name, Some(info.description), Some(arguments))
}

fn required_str<'a>(
    arguments: Option<&'a serde_json::Map<String, Value>>,
    name: &str,
) -> Result<&'a str, rmcp::ErrorData> {
    arguments
        .and_then(|a| a.get(name))
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            rmcp::ErrorData::invalid_params(format!("Missing required argument: {name}"), None)
        })
}

/// Numeric prompt arguments arrive as numbers or as decimal strings
/// depending on the client.
fn required_id(
    arguments: Option<&serde_json::Map<String, Value>>,
    name: &str,
) -> Result<u32, rmcp::ErrorData> {
    let value = arguments.and_then(|a| a.get(name)).ok_or_else(|| {
        rmcp::ErrorData::invalid_params(format!("Missing required argument: {name}"), None)
    })?;

    let parsed = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        rmcp::ErrorData::invalid_params(
            format!("Argument {name} must be a positive integer"),
            None,
        )
    })
}

impl HolocronServer {
    /// Handle `prompts/list`.
    pub(super) async fn handle_list_prompts(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, rmcp::ErrorData> {
        Ok(ListPromptsResult {
            prompts: workflows::WORKFLOWS.iter().map(to_prompt).collect(),
            next_cursor: None,
            meta: None,
        })
    }

    /// Handle `prompts/get`: run the named workflow and hand back its
    /// combined result wrapped in instructions for the model.
    pub(super) async fn handle_get_prompt(
        &self,
        request: GetPromptRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, rmcp::ErrorData> {
        let info = workflows::find(&request.name).ok_or_else(|| {
            rmcp::ErrorData::invalid_params(format!("Unknown prompt: {}", request.name), None)
        })?;
        let args = request.arguments.as_ref();

        let (envelope, instructions) = match info.name {
            "explore_item" => {
                let item_type = required_str(args, "item_type")?;
                let item_id = required_id(args, "item_id")?;
                (
                    workflows::explore_item(&self.dispatcher, item_type, item_id).await,
                    format!(
                        "Explore {item_type} {item_id} using the catalog record and my \
                         saved favorites below. Summarize the record and point out any \
                         connection to the favorites."
                    ),
                )
            }
            "compare_items" => {
                let item_type = required_str(args, "item_type")?;
                let first_id = required_id(args, "first_id")?;
                let second_id = required_id(args, "second_id")?;
                (
                    workflows::compare_items(&self.dispatcher, item_type, first_id, second_id)
                        .await,
                    format!(
                        "Compare {item_type} {first_id} with {item_type} {second_id} \
                         using the two catalog records below. Highlight the most \
                         interesting differences."
                    ),
                )
            }
            _ => {
                return Err(rmcp::ErrorData::invalid_params(
                    format!("Unknown prompt: {}", request.name),
                    None,
                ));
            }
        };

        let text = format!("{instructions}\n\n{}", envelope.to_json());
        Ok(GetPromptResult {
            description: Some(info.description.into()),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
        })
    }
}
