//! Customer Tools.
//!
//! Customer bodies are sent unwrapped (no `{"customer": ...}` envelope).

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{id_only_schema, id_property, page_only_schema};
use crate::domain::tools::arguments::{require_resource_id, ArgumentError, ToolArguments};
use crate::domain::tools::ToolDefinition;

// ═══════════════════════════════════════════════════════════════════════════
// Tool Parameters
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCustomerArgs {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl ToolArguments for CreateCustomerArgs {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCustomerArgs {
    #[serde(skip_serializing)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ToolArguments for UpdateCustomerArgs {
    fn validate(&self) -> Result<(), ArgumentError> {
        require_resource_id("id", &self.id)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tool Definitions
// ═══════════════════════════════════════════════════════════════════════════

pub fn create_customer_tool() -> ToolDefinition {
    ToolDefinition::new(
        "create_customer",
        "Create a new customer with email and optional name",
        json!({
            "type": "object",
            "required": ["email"],
            "properties": {
                "email": { "type": "string", "description": "Customer email address" },
                "full_name": { "type": "string", "description": "Customer full name" }
            }
        }),
    )
}

pub fn list_customers_tool() -> ToolDefinition {
    ToolDefinition::new(
        "list_customers",
        "List all customers (paginated)",
        page_only_schema(),
    )
}

pub fn get_customer_tool() -> ToolDefinition {
    ToolDefinition::new(
        "get_customer",
        "Get customer details by ID",
        id_only_schema("Customer ID"),
    )
}

pub fn update_customer_tool() -> ToolDefinition {
    ToolDefinition::new(
        "update_customer",
        "Update customer name or email",
        json!({
            "type": "object",
            "required": ["id"],
            "properties": {
                "id": id_property("Customer ID"),
                "full_name": { "type": "string", "description": "Updated full name" },
                "email": { "type": "string", "description": "Updated email" }
            }
        }),
    )
}

pub fn all_customers_tools() -> Vec<ToolDefinition> {
    vec![
        create_customer_tool(),
        list_customers_tool(),
        get_customer_tool(),
        update_customer_tool(),
    ]
}
