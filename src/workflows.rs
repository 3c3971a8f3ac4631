// src/workflows.rs
// Workflow composer: named multi-step pipelines over the dispatch layer

use crate::dispatch::{Dispatcher, Envelope};
use serde_json::json;

/// Metadata for one workflow argument, surfaced through the prompt list.
pub struct WorkflowArg {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// A named workflow the prompt surface can list and run.
pub struct WorkflowInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub args: &'static [WorkflowArg],
}

pub const WORKFLOWS: &[WorkflowInfo] = &[
    WorkflowInfo {
        name: "explore_item",
        description: "Fetch a catalog record and pair it with your favorites of the same type",
        args: &[
            WorkflowArg {
                name: "item_type",
                description: "Kind of item: person, planet, starship or film",
                required: true,
            },
            WorkflowArg {
                name: "item_id",
                description: "Numeric id of the item",
                required: true,
            },
        ],
    },
    WorkflowInfo {
        name: "compare_items",
        description: "Fetch two catalog records of the same type side by side",
        args: &[
            WorkflowArg {
                name: "item_type",
                description: "Kind of item: person, planet, starship or film",
                required: true,
            },
            WorkflowArg {
                name: "first_id",
                description: "Numeric id of the first item",
                required: true,
            },
            WorkflowArg {
                name: "second_id",
                description: "Numeric id of the second item",
                required: true,
            },
        ],
    },
];

/// Look up a workflow by name.
pub fn find(name: &str) -> Option<&'static WorkflowInfo> {
    WORKFLOWS.iter().find(|w| w.name == name)
}

/// Fetch one record and merge it with the stored favorites of its type.
///
/// A failed fetch is terminal and its envelope is returned as-is. A failed
/// favorites listing degrades: the record is still returned, flagged with
/// `favorites_unavailable`.
pub async fn explore_item(dispatcher: &Dispatcher, item_type: &str, item_id: u32) -> Envelope {
    let fetched = dispatcher.fetch_record(item_type, item_id).await;
    if !fetched.ok {
        return fetched;
    }

    let listed = dispatcher.list_favorites(Some(item_type)).await;
    let merged = match (fetched.data, listed.ok, listed.data) {
        (Some(record), true, Some(favorites)) => json!({
            "item_type": item_type,
            "item_id": item_id,
            "record": record,
            "favorites": favorites["favorites"],
        }),
        (record, _, _) => json!({
            "item_type": item_type,
            "item_id": item_id,
            "record": record,
            "favorites_unavailable": true,
        }),
    };
    Envelope::success(merged)
}

/// Fetch two records of one type, sequentially. Either fetch failing is
/// terminal; its envelope is returned unchanged.
pub async fn compare_items(
    dispatcher: &Dispatcher,
    item_type: &str,
    first_id: u32,
    second_id: u32,
) -> Envelope {
    let first = dispatcher.fetch_record(item_type, first_id).await;
    if !first.ok {
        return first;
    }
    let second = dispatcher.fetch_record(item_type, second_id).await;
    if !second.ok {
        return second;
    }

    Envelope::success(json!({
        "item_type": item_type,
        "first": { "item_id": first_id, "record": first.data },
        "second": { "item_id": second_id, "record": second.data },
    }))
}
