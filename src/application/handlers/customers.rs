//! CustomersHandler - customer operations.
//!
//! Customer bodies go out unwrapped, and updates use PUT.

use std::sync::Arc;

use serde_json::Value;

use super::resource_path;
use crate::domain::tools::definitions::{
    CreateCustomerArgs, PageArgs, ResourceIdArgs, UpdateCustomerArgs,
};
use crate::ports::{ApiClient, ApiError, ApiRequest};

const CUSTOMERS_PATH: &str = "/api/customers";

pub struct CustomersHandler {
    client: Arc<dyn ApiClient>,
}

impl CustomersHandler {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create(&self, args: CreateCustomerArgs) -> Result<Value, ApiError> {
        let request = ApiRequest::post(CUSTOMERS_PATH).with_json(&args)?;
        self.client.request(request).await
    }

    pub async fn list(&self, args: PageArgs) -> Result<Value, ApiError> {
        let request = ApiRequest::get(CUSTOMERS_PATH).with_query("page", args.page);
        self.client.request(request).await
    }

    pub async fn get(&self, args: ResourceIdArgs) -> Result<Value, ApiError> {
        let request = ApiRequest::get(resource_path(CUSTOMERS_PATH, &args.id));
        self.client.request(request).await
    }

    pub async fn update(&self, args: UpdateCustomerArgs) -> Result<Value, ApiError> {
        let request = ApiRequest::put(resource_path(CUSTOMERS_PATH, &args.id)).with_json(&args)?;
        self.client.request(request).await
    }
}
