//! Product Tools - products and the prices attached to them.
//!
//! A product carries one or more prices. Each price is either a one-time
//! charge or a recurring charge billed every `recurring_interval_count`
//! intervals.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{id_only_schema, id_property, page_only_schema};
use crate::domain::tools::arguments::{
    require_min_items, require_resource_id, ArgumentError, ToolArguments,
};
use crate::domain::tools::ToolDefinition;

/// Currency applied to prices that do not name one.
pub const DEFAULT_CURRENCY: &str = "GTQ";

// ═══════════════════════════════════════════════════════════════════════════
// Enums
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeType {
    OneTime,
    Recurring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringInterval {
    Week,
    Month,
    Year,
}

// ═══════════════════════════════════════════════════════════════════════════
// Tool Parameters
// ═══════════════════════════════════════════════════════════════════════════

/// One price of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAttributes {
    /// Price in cents (10000 = Q100.00)
    pub amount_in_cents: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub charge_type: ChargeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_interval: Option<RecurringInterval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_interval_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_trial_days: Option<u32>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProductArgs {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub prices_attributes: Vec<PriceAttributes>,
}

impl ToolArguments for CreateProductArgs {
    fn validate(&self) -> Result<(), ArgumentError> {
        require_min_items("prices_attributes", &self.prices_attributes, 1)
    }
}

/// Changes to a product. The ID goes in the path, never in the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProductArgs {
    #[serde(skip_serializing)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices_attributes: Option<Vec<PriceAttributes>>,
}

impl ToolArguments for UpdateProductArgs {
    fn validate(&self) -> Result<(), ArgumentError> {
        require_resource_id("id", &self.id)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tool Definitions
// ═══════════════════════════════════════════════════════════════════════════

fn price_schema() -> Value {
    json!({
        "type": "object",
        "required": ["amount_in_cents", "charge_type"],
        "properties": {
            "amount_in_cents": {
                "type": "integer",
                "description": "Price in cents (e.g. 10000 = Q100.00)"
            },
            "currency": {
                "type": "string",
                "default": DEFAULT_CURRENCY,
                "description": "Currency code (default: GTQ)"
            },
            "charge_type": {
                "type": "string",
                "enum": ["one_time", "recurring"],
                "description": "one_time or recurring"
            },
            "recurring_interval": {
                "type": "string",
                "enum": ["month", "week", "year"],
                "description": "Interval for recurring charges"
            },
            "recurring_interval_count": {
                "type": "integer",
                "description": "Number of intervals between charges"
            },
            "free_trial_days": {
                "type": "integer",
                "description": "Free trial period in days"
            }
        }
    })
}

pub fn create_product_tool() -> ToolDefinition {
    ToolDefinition::new(
        "create_product",
        "Create a new product with one or more prices (one_time or recurring)",
        json!({
            "type": "object",
            "required": ["name", "prices_attributes"],
            "properties": {
                "name": { "type": "string", "description": "Product name" },
                "description": { "type": "string", "description": "Product description" },
                "prices_attributes": {
                    "type": "array",
                    "minItems": 1,
                    "items": price_schema(),
                    "description": "At least one price is required"
                }
            }
        }),
    )
}

pub fn list_products_tool() -> ToolDefinition {
    ToolDefinition::new(
        "list_products",
        "List all products (paginated)",
        page_only_schema(),
    )
}

pub fn get_product_tool() -> ToolDefinition {
    ToolDefinition::new(
        "get_product",
        "Get product details by ID",
        id_only_schema("Product ID"),
    )
}

pub fn update_product_tool() -> ToolDefinition {
    ToolDefinition::new(
        "update_product",
        "Update a product's name, description, or prices",
        json!({
            "type": "object",
            "required": ["id"],
            "properties": {
                "id": id_property("Product ID"),
                "name": { "type": "string", "description": "New product name" },
                "description": { "type": "string", "description": "New product description" },
                "prices_attributes": {
                    "type": "array",
                    "items": price_schema(),
                    "description": "Updated prices"
                }
            }
        }),
    )
}

pub fn delete_product_tool() -> ToolDefinition {
    ToolDefinition::new(
        "delete_product",
        "Delete a product by ID",
        id_only_schema("Product ID"),
    )
}

pub fn all_products_tools() -> Vec<ToolDefinition> {
    vec![
        create_product_tool(),
        list_products_tool(),
        get_product_tool(),
        update_product_tool(),
        delete_product_tool(),
    ]
}
