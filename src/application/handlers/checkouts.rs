//! CheckoutsHandler - checkout session operations.

use std::sync::Arc;

use serde_json::Value;

use super::{resource_path, wrapped_body};
use crate::domain::tools::definitions::{
    CreateCheckoutArgs, ListCheckoutsArgs, ResourceIdArgs, UpdateCheckoutArgs,
};
use crate::ports::{ApiClient, ApiError, ApiRequest};

const CHECKOUTS_PATH: &str = "/api/checkouts";

pub struct CheckoutsHandler {
    client: Arc<dyn ApiClient>,
}

impl CheckoutsHandler {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create(&self, args: CreateCheckoutArgs) -> Result<Value, ApiError> {
        let request = ApiRequest::post(format!("{}/", CHECKOUTS_PATH))
            .with_body(wrapped_body("checkout", &args)?);
        self.client.request(request).await
    }

    pub async fn list(&self, args: ListCheckoutsArgs) -> Result<Value, ApiError> {
        let request = ApiRequest::get(CHECKOUTS_PATH)
            .with_query("from_time", args.from_time)
            .with_query("until_time", args.until_time)
            .with_query("user_id", args.user_id)
            .with_query("page", args.page);
        self.client.request(request).await
    }

    pub async fn get(&self, args: ResourceIdArgs) -> Result<Value, ApiError> {
        let request = ApiRequest::get(resource_path(CHECKOUTS_PATH, &args.id));
        self.client.request(request).await
    }

    /// Only unpaid checkouts can be changed; the API rejects the rest.
    pub async fn update(&self, args: UpdateCheckoutArgs) -> Result<Value, ApiError> {
        let request = ApiRequest::patch(resource_path(CHECKOUTS_PATH, &args.id))
            .with_body(wrapped_body("checkout", &args)?);
        self.client.request(request).await
    }
}
