//! RecurrenteToolExecutor - maps tool calls onto handlers.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::application::handlers::{
    CheckoutsHandler, CouponsHandler, CustomersHandler, ProductsHandler, SubscriptionsHandler,
    VerifyWebhookHandler,
};
use crate::domain::tools::definitions::all_tools;
use crate::domain::tools::{ToolArguments, ToolCall, ToolDefinition, ToolRegistry};
use crate::ports::{ApiClient, ApiError, ToolExecutionError, ToolExecutor};

/// Executes every catalog tool against one `ApiClient`.
pub struct RecurrenteToolExecutor {
    registry: ToolRegistry,
    products: ProductsHandler,
    checkouts: CheckoutsHandler,
    customers: CustomersHandler,
    subscriptions: SubscriptionsHandler,
    coupons: CouponsHandler,
    webhooks: VerifyWebhookHandler,
}

impl RecurrenteToolExecutor {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self {
            registry: all_tools().into_iter().collect(),
            products: ProductsHandler::new(Arc::clone(&client)),
            checkouts: CheckoutsHandler::new(Arc::clone(&client)),
            customers: CustomersHandler::new(Arc::clone(&client)),
            subscriptions: SubscriptionsHandler::new(Arc::clone(&client)),
            coupons: CouponsHandler::new(client),
            webhooks: VerifyWebhookHandler::new(),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    async fn dispatch(&self, call: &ToolCall) -> Result<Value, ToolExecutionError> {
        let result = match call.name() {
            "create_product" => self.products.create(args(call)?).await,
            "list_products" => self.products.list(args(call)?).await,
            "get_product" => self.products.get(args(call)?).await,
            "update_product" => self.products.update(args(call)?).await,
            "delete_product" => self.products.delete(args(call)?).await,

            "create_checkout" => self.checkouts.create(args(call)?).await,
            "list_checkouts" => self.checkouts.list(args(call)?).await,
            "get_checkout" => self.checkouts.get(args(call)?).await,
            "update_checkout" => self.checkouts.update(args(call)?).await,

            "create_customer" => self.customers.create(args(call)?).await,
            "list_customers" => self.customers.list(args(call)?).await,
            "get_customer" => self.customers.get(args(call)?).await,
            "update_customer" => self.customers.update(args(call)?).await,

            "list_subscriptions" => self.subscriptions.list(args(call)?).await,
            "get_subscription" => self.subscriptions.get(args(call)?).await,
            "pause_subscription" => self.subscriptions.pause(args(call)?).await,
            "cancel_subscription" => self.subscriptions.cancel(args(call)?).await,

            "create_coupon" => self.coupons.create(args(call)?).await,
            "list_coupons" => self.coupons.list(args(call)?).await,
            "get_coupon" => self.coupons.get(args(call)?).await,
            "update_coupon" => self.coupons.update(args(call)?).await,
            "delete_coupon" => self.coupons.delete(args(call)?).await,

            "verify_webhook" => to_json(&self.webhooks.handle(&args(call)?)),

            other => return Err(ToolExecutionError::ToolNotFound(other.to_string())),
        };

        result.map_err(ToolExecutionError::from)
    }
}

fn args<T: ToolArguments>(call: &ToolCall) -> Result<T, ToolExecutionError> {
    call.parse_arguments()
        .map_err(|e| ToolExecutionError::invalid_arguments(call.name(), e))
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

#[async_trait]
impl ToolExecutor for RecurrenteToolExecutor {
    async fn execute(&self, call: ToolCall) -> Result<Value, ToolExecutionError> {
        if !self.registry.has_tool(call.name()) {
            return Err(ToolExecutionError::ToolNotFound(call.name().to_string()));
        }

        tracing::debug!(tool = %call.name(), "Executing tool");

        let result = self.dispatch(&call).await;
        match &result {
            Err(e) if e.is_caller_error() => {
                tracing::warn!(tool = %call.name(), error = %e, "Tool call rejected")
            }
            Err(e) => tracing::error!(tool = %call.name(), error = %e, "Tool call failed"),
            Ok(_) => {}
        }
        result
    }

    fn available_tools(&self) -> Vec<ToolDefinition> {
        self.registry.tools().to_vec()
    }

    fn has_tool(&self, name: &str) -> bool {
        self.registry.has_tool(name)
    }
}
