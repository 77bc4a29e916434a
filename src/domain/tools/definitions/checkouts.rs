//! Checkout Tools - hosted checkout sessions (payment links).
//!
//! Items either reference an existing price (`price_id`) or are described
//! inline with `amount_in_cents` and `currency`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{id_only_schema, id_property, page_property};
use crate::domain::tools::arguments::{
    require_min_items, require_resource_id, ArgumentError, ToolArguments,
};
use crate::domain::tools::ToolDefinition;

// ═══════════════════════════════════════════════════════════════════════════
// Tool Parameters
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_in_cents: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCheckoutArgs {
    pub items: Vec<CheckoutItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
    /// ISO 8601
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<String>,
}

impl ToolArguments for CreateCheckoutArgs {
    fn validate(&self) -> Result<(), ArgumentError> {
        require_min_items("items", &self.items, 1)
    }
}

/// Filters for listing checkouts. All go in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListCheckoutsArgs {
    pub from_time: Option<String>,
    pub until_time: Option<String>,
    pub user_id: Option<String>,
    pub page: Option<u32>,
}

impl ToolArguments for ListCheckoutsArgs {}

/// Changes to an unpaid checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCheckoutArgs {
    #[serde(skip_serializing)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<CheckoutItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl ToolArguments for UpdateCheckoutArgs {
    fn validate(&self) -> Result<(), ArgumentError> {
        require_resource_id("id", &self.id)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tool Definitions
// ═══════════════════════════════════════════════════════════════════════════

fn checkout_item_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "price_id": { "type": "string", "description": "Price ID from a product" },
            "currency": { "type": "string", "description": "Currency code (e.g. GTQ)" },
            "amount_in_cents": { "type": "integer", "description": "Amount in cents for inline items" },
            "quantity": { "type": "integer", "description": "Quantity (default: 1)" },
            "name": { "type": "string", "description": "Item name (for inline items)" },
            "image": { "type": "string", "description": "Item image URL" }
        }
    })
}

fn metadata_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "additionalProperties": { "type": "string" },
        "description": description
    })
}

pub fn create_checkout_tool() -> ToolDefinition {
    ToolDefinition::new(
        "create_checkout",
        "Create a checkout session (payment link). Use price_id for existing products or inline amount_in_cents + currency",
        json!({
            "type": "object",
            "required": ["items"],
            "properties": {
                "items": {
                    "type": "array",
                    "minItems": 1,
                    "items": checkout_item_schema(),
                    "description": "Checkout items (use price_id OR inline amount_in_cents + currency)"
                },
                "success_url": { "type": "string", "description": "Redirect URL after successful payment" },
                "cancel_url": { "type": "string", "description": "Redirect URL if payment is cancelled" },
                "user_id": { "type": "string", "description": "Recurrente user ID" },
                "customer_id": { "type": "string", "description": "Customer ID to associate" },
                "metadata": metadata_schema("Arbitrary key-value metadata"),
                "expires_at": { "type": "string", "description": "Expiration datetime (ISO 8601)" },
                "coupon_id": { "type": "string", "description": "Coupon ID to apply" }
            }
        }),
    )
}

pub fn list_checkouts_tool() -> ToolDefinition {
    ToolDefinition::new(
        "list_checkouts",
        "List checkouts with optional filters (from_time, until_time, user_id, page)",
        json!({
            "type": "object",
            "properties": {
                "from_time": { "type": "string", "description": "Filter from datetime (ISO 8601)" },
                "until_time": { "type": "string", "description": "Filter until datetime (ISO 8601)" },
                "user_id": { "type": "string", "description": "Filter by user ID" },
                "page": page_property()
            }
        }),
    )
}

pub fn get_checkout_tool() -> ToolDefinition {
    ToolDefinition::new(
        "get_checkout",
        "Get checkout details and payment status by ID",
        id_only_schema("Checkout ID"),
    )
}

pub fn update_checkout_tool() -> ToolDefinition {
    ToolDefinition::new(
        "update_checkout",
        "Update an unpaid checkout (items, URLs, metadata, expiration)",
        json!({
            "type": "object",
            "required": ["id"],
            "properties": {
                "id": id_property("Checkout ID (must be unpaid)"),
                "items": {
                    "type": "array",
                    "items": checkout_item_schema(),
                    "description": "Updated items"
                },
                "success_url": { "type": "string", "description": "New success URL" },
                "cancel_url": { "type": "string", "description": "New cancel URL" },
                "metadata": metadata_schema("Updated metadata"),
                "expires_at": { "type": "string", "description": "New expiration datetime" }
            }
        }),
    )
}

pub fn all_checkouts_tools() -> Vec<ToolDefinition> {
    vec![
        create_checkout_tool(),
        list_checkouts_tool(),
        get_checkout_tool(),
        update_checkout_tool(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tools::arguments::parse_arguments;

    #[test]
    fn create_requires_items() {
        assert!(parse_arguments::<CreateCheckoutArgs>(&json!({})).is_err());

        let err = parse_arguments::<CreateCheckoutArgs>(&json!({ "items": [] })).unwrap_err();
        assert!(err.message().contains("items"));
    }

    #[test]
    fn create_serializes_only_present_fields() {
        let args: CreateCheckoutArgs = parse_arguments(&json!({
            "items": [{ "price_id": "pr_1" }],
            "metadata": { "order": "42" }
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({
                "items": [{ "price_id": "pr_1" }],
                "metadata": { "order": "42" }
            })
        );
    }

    #[test]
    fn metadata_values_must_be_strings() {
        let result = parse_arguments::<CreateCheckoutArgs>(&json!({
            "items": [{ "price_id": "pr_1" }],
            "metadata": { "order": 42 }
        }));

        assert!(result.is_err());
    }

    #[test]
    fn list_filters_are_optional() {
        let args: ListCheckoutsArgs = parse_arguments(&json!({ "user_id": "us_1" })).unwrap();

        assert_eq!(args.user_id.as_deref(), Some("us_1"));
        assert_eq!(args.page, None);
    }

    #[test]
    fn update_serializes_without_id() {
        let args: UpdateCheckoutArgs = parse_arguments(&json!({
            "id": "ch_1",
            "expires_at": "2025-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({ "expires_at": "2025-01-01T00:00:00Z" })
        );
    }

    #[test]
    fn all_checkouts_tools_returns_four_tools() {
        assert_eq!(all_checkouts_tools().len(), 4);
    }
}
