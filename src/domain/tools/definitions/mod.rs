//! Tool Definitions - argument types and schemas for every tool, by resource.
//!
//! ## Module Structure
//!
//! - [`products`] - Products and their prices
//! - [`checkouts`] - Checkout sessions (payment links)
//! - [`customers`] - Customers
//! - [`subscriptions`] - Subscriptions (read, pause, cancel)
//! - [`coupons`] - Discount coupons
//! - [`webhooks`] - Local webhook signature verification

pub mod checkouts;
pub mod coupons;
pub mod customers;
pub mod products;
pub mod subscriptions;
pub mod webhooks;

use serde::Deserialize;
use serde_json::{json, Value};

use super::arguments::{require_resource_id, ArgumentError, ToolArguments};
use super::ToolDefinition;

pub use checkouts::*;
pub use coupons::*;
pub use customers::*;
pub use products::*;
pub use subscriptions::*;
pub use webhooks::*;

// ═══════════════════════════════════════════════════════════════════════════
// Shared Parameters
// ═══════════════════════════════════════════════════════════════════════════

/// Arguments for tools that address one resource by ID.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceIdArgs {
    pub id: String,
}

impl ToolArguments for ResourceIdArgs {
    fn validate(&self) -> Result<(), ArgumentError> {
        require_resource_id("id", &self.id)
    }
}

/// Arguments for paginated list tools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PageArgs {
    pub page: Option<u32>,
}

impl ToolArguments for PageArgs {}

pub(crate) fn id_property(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

pub(crate) fn page_property() -> Value {
    json!({ "type": "integer", "minimum": 1, "description": "Page number for pagination" })
}

pub(crate) fn id_only_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "required": ["id"],
        "properties": { "id": id_property(description) }
    })
}

pub(crate) fn page_only_schema() -> Value {
    json!({
        "type": "object",
        "properties": { "page": page_property() }
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Catalog
// ═══════════════════════════════════════════════════════════════════════════

/// Every tool in `tools/list` order.
pub fn all_tools() -> Vec<ToolDefinition> {
    let mut tools = all_products_tools();
    tools.extend(all_checkouts_tools());
    tools.extend(all_customers_tools());
    tools.extend(all_subscriptions_tools());
    tools.extend(all_coupons_tools());
    tools.push(verify_webhook_tool());
    tools
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tools::arguments::parse_arguments;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_twenty_three_unique_tools() {
        let tools = all_tools();
        let names: HashSet<&str> = tools.iter().map(ToolDefinition::name).collect();

        assert_eq!(tools.len(), 23);
        assert_eq!(names.len(), 23);
    }

    #[test]
    fn every_schema_is_an_object_schema() {
        for tool in all_tools() {
            assert_eq!(tool.input_schema()["type"], "object", "{}", tool.name());
            assert!(tool.input_schema()["properties"].is_object(), "{}", tool.name());
            assert!(!tool.description().is_empty(), "{}", tool.name());
        }
    }

    #[test]
    fn required_arguments_are_declared_properties() {
        for tool in all_tools() {
            for required in tool.required_arguments() {
                assert!(
                    tool.input_schema()["properties"].get(required).is_some(),
                    "{} requires undeclared {}",
                    tool.name(),
                    required
                );
            }
        }
    }

    #[test]
    fn catalog_order_groups_by_resource() {
        let tools = all_tools();

        assert_eq!(tools[0].name(), "create_product");
        assert_eq!(tools[5].name(), "create_checkout");
        assert_eq!(tools[21].name(), "delete_coupon");
        assert_eq!(tools[22].name(), "verify_webhook");
    }

    #[test]
    fn resource_id_rejects_empty() {
        assert!(parse_arguments::<ResourceIdArgs>(&json!({ "id": "" })).is_err());
        assert!(parse_arguments::<ResourceIdArgs>(&json!({})).is_err());
    }

    #[test]
    fn page_args_default_to_none() {
        let args: PageArgs = parse_arguments(&json!({})).unwrap();

        assert_eq!(args.page, None);
    }

    #[test]
    fn page_args_reject_negative() {
        assert!(parse_arguments::<PageArgs>(&json!({ "page": -1 })).is_err());
    }
}
