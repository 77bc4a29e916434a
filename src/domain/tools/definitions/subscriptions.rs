//! Subscription Tools.
//!
//! Subscriptions are created through recurring checkouts, so there is no
//! create tool here.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{id_only_schema, id_property, page_only_schema};
use crate::domain::tools::arguments::{require_resource_id, ArgumentError, ToolArguments};
use crate::domain::tools::ToolDefinition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionAction {
    Pause,
    Unpause,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PauseSubscriptionArgs {
    pub id: String,
    pub act: SubscriptionAction,
}

impl ToolArguments for PauseSubscriptionArgs {
    fn validate(&self) -> Result<(), ArgumentError> {
        require_resource_id("id", &self.id)
    }
}

pub fn list_subscriptions_tool() -> ToolDefinition {
    ToolDefinition::new(
        "list_subscriptions",
        "List all subscriptions (paginated)",
        page_only_schema(),
    )
}

pub fn get_subscription_tool() -> ToolDefinition {
    ToolDefinition::new(
        "get_subscription",
        "Get subscription details by ID",
        id_only_schema("Subscription ID"),
    )
}

pub fn pause_subscription_tool() -> ToolDefinition {
    ToolDefinition::new(
        "pause_subscription",
        "Pause or unpause a subscription (act: pause | unpause)",
        json!({
            "type": "object",
            "required": ["id", "act"],
            "properties": {
                "id": id_property("Subscription ID"),
                "act": {
                    "type": "string",
                    "enum": ["pause", "unpause"],
                    "description": "Action: pause or unpause"
                }
            }
        }),
    )
}

pub fn cancel_subscription_tool() -> ToolDefinition {
    ToolDefinition::new(
        "cancel_subscription",
        "Cancel a subscription (irreversible)",
        id_only_schema("Subscription ID"),
    )
}

pub fn all_subscriptions_tools() -> Vec<ToolDefinition> {
    vec![
        list_subscriptions_tool(),
        get_subscription_tool(),
        pause_subscription_tool(),
        cancel_subscription_tool(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tools::arguments::parse_arguments;

    #[test]
    fn action_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(SubscriptionAction::Unpause).unwrap(),
            json!("unpause")
        );
    }

    #[test]
    fn pause_rejects_unknown_action() {
        let result =
            parse_arguments::<PauseSubscriptionArgs>(&json!({ "id": "su_1", "act": "resume" }));

        assert!(result.is_err());
    }

    #[test]
    fn pause_requires_act() {
        assert!(parse_arguments::<PauseSubscriptionArgs>(&json!({ "id": "su_1" })).is_err());
    }
}
