//! SubscriptionsHandler - subscription read, pause and cancel.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::resource_path;
use crate::domain::tools::definitions::{
    PageArgs, PauseSubscriptionArgs, ResourceIdArgs, SubscriptionAction,
};
use crate::ports::{ApiClient, ApiError, ApiRequest};

const SUBSCRIPTIONS_PATH: &str = "/api/subscriptions";

#[derive(Serialize)]
struct ActBody {
    act: SubscriptionAction,
}

pub struct SubscriptionsHandler {
    client: Arc<dyn ApiClient>,
}

impl SubscriptionsHandler {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, args: PageArgs) -> Result<Value, ApiError> {
        let request = ApiRequest::get(SUBSCRIPTIONS_PATH).with_query("page", args.page);
        self.client.request(request).await
    }

    pub async fn get(&self, args: ResourceIdArgs) -> Result<Value, ApiError> {
        let request = ApiRequest::get(resource_path(SUBSCRIPTIONS_PATH, &args.id));
        self.client.request(request).await
    }

    pub async fn pause(&self, args: PauseSubscriptionArgs) -> Result<Value, ApiError> {
        let request = ApiRequest::patch(resource_path(SUBSCRIPTIONS_PATH, &args.id))
            .with_json(&ActBody { act: args.act })?;
        self.client.request(request).await
    }

    /// Cancellation cannot be undone.
    pub async fn cancel(&self, args: ResourceIdArgs) -> Result<Value, ApiError> {
        let request = ApiRequest::delete(resource_path(SUBSCRIPTIONS_PATH, &args.id));
        self.client.request(request).await
    }
}
