//! Coupon Tools - fixed-amount or percentage discounts.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{id_only_schema, id_property, page_only_schema};
use crate::domain::tools::arguments::{require_resource_id, ArgumentError, ToolArguments};
use crate::domain::tools::ToolDefinition;

// ═══════════════════════════════════════════════════════════════════════════
// Enums
// ═══════════════════════════════════════════════════════════════════════════

/// How long a coupon applies once redeemed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponDuration {
    /// Single charge
    Once,
    /// Every recurring charge
    Forever,
}

// ═══════════════════════════════════════════════════════════════════════════
// Tool Parameters
// ═══════════════════════════════════════════════════════════════════════════

/// Exclusivity of `amount_off_in_cents` and `percent_off` is enforced
/// upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCouponArgs {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_off_in_cents: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_off: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub duration: CouponDuration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_redemptions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redeem_by: Option<String>,
}

impl ToolArguments for CreateCouponArgs {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCouponArgs {
    #[serde(skip_serializing)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_redemptions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redeem_by: Option<String>,
}

impl ToolArguments for UpdateCouponArgs {
    fn validate(&self) -> Result<(), ArgumentError> {
        require_resource_id("id", &self.id)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tool Definitions
// ═══════════════════════════════════════════════════════════════════════════

pub fn create_coupon_tool() -> ToolDefinition {
    ToolDefinition::new(
        "create_coupon",
        "Create a discount coupon (fixed amount or percentage, once or forever)",
        json!({
            "type": "object",
            "required": ["name", "duration"],
            "properties": {
                "name": { "type": "string", "description": "Coupon name" },
                "amount_off_in_cents": {
                    "type": "integer",
                    "description": "Fixed discount in cents (mutually exclusive with percent_off)"
                },
                "percent_off": {
                    "type": "number",
                    "description": "Percentage discount 1-100 (mutually exclusive with amount_off_in_cents)"
                },
                "currency": {
                    "type": "string",
                    "description": "Currency code (required if amount_off_in_cents)"
                },
                "duration": {
                    "type": "string",
                    "enum": ["once", "forever"],
                    "description": "once = single use, forever = all recurring charges"
                },
                "max_redemptions": {
                    "type": "integer",
                    "description": "Maximum number of times this coupon can be redeemed"
                },
                "redeem_by": { "type": "string", "description": "Expiration date (ISO 8601)" }
            }
        }),
    )
}

pub fn list_coupons_tool() -> ToolDefinition {
    ToolDefinition::new(
        "list_coupons",
        "List all coupons (paginated)",
        page_only_schema(),
    )
}

pub fn get_coupon_tool() -> ToolDefinition {
    ToolDefinition::new(
        "get_coupon",
        "Get coupon details by ID",
        id_only_schema("Coupon ID"),
    )
}

pub fn update_coupon_tool() -> ToolDefinition {
    ToolDefinition::new(
        "update_coupon",
        "Update a coupon's name, max redemptions, or expiry",
        json!({
            "type": "object",
            "required": ["id"],
            "properties": {
                "id": id_property("Coupon ID"),
                "name": { "type": "string", "description": "Updated coupon name" },
                "max_redemptions": { "type": "integer", "description": "Updated max redemptions" },
                "redeem_by": { "type": "string", "description": "Updated expiration date" }
            }
        }),
    )
}

pub fn delete_coupon_tool() -> ToolDefinition {
    ToolDefinition::new(
        "delete_coupon",
        "Delete a coupon by ID",
        id_only_schema("Coupon ID"),
    )
}

pub fn all_coupons_tools() -> Vec<ToolDefinition> {
    vec![
        create_coupon_tool(),
        list_coupons_tool(),
        get_coupon_tool(),
        update_coupon_tool(),
        delete_coupon_tool(),
    ]
}
