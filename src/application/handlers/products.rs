//! ProductsHandler - product catalogue operations.

use std::sync::Arc;

use serde_json::Value;

use super::{resource_path, wrapped_body};
use crate::domain::tools::definitions::{
    CreateProductArgs, PageArgs, ResourceIdArgs, UpdateProductArgs,
};
use crate::ports::{ApiClient, ApiError, ApiRequest};

const PRODUCTS_PATH: &str = "/api/products";

pub struct ProductsHandler {
    client: Arc<dyn ApiClient>,
}

impl ProductsHandler {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create(&self, args: CreateProductArgs) -> Result<Value, ApiError> {
        let request =
            ApiRequest::post(format!("{}/", PRODUCTS_PATH)).with_body(wrapped_body("product", &args)?);
        self.client.request(request).await
    }

    pub async fn list(&self, args: PageArgs) -> Result<Value, ApiError> {
        let request = ApiRequest::get(PRODUCTS_PATH).with_query("page", args.page);
        self.client.request(request).await
    }

    pub async fn get(&self, args: ResourceIdArgs) -> Result<Value, ApiError> {
        let request = ApiRequest::get(resource_path(PRODUCTS_PATH, &args.id));
        self.client.request(request).await
    }

    pub async fn update(&self, args: UpdateProductArgs) -> Result<Value, ApiError> {
        let request = ApiRequest::patch(resource_path(PRODUCTS_PATH, &args.id))
            .with_body(wrapped_body("product", &args)?);
        self.client.request(request).await
    }

    pub async fn delete(&self, args: ResourceIdArgs) -> Result<Value, ApiError> {
        let request = ApiRequest::delete(resource_path(PRODUCTS_PATH, &args.id));
        self.client.request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::recurrente::MockApiClient;
    use crate::domain::tools::parse_arguments;
    use crate::ports::HttpMethod;
    use serde_json::json;

    fn handler() -> (ProductsHandler, MockApiClient) {
        let mock = MockApiClient::new();
        (ProductsHandler::new(Arc::new(mock.clone())), mock)
    }

    #[tokio::test]
    async fn create_posts_wrapped_product() {
        let (handler, mock) = handler();
        let args: CreateProductArgs = parse_arguments(&json!({
            "name": "Plan Pro",
            "prices_attributes": [{ "amount_in_cents": 10000, "charge_type": "one_time" }]
        }))
        .unwrap();

        handler.create(args).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.method(), HttpMethod::Post);
        assert_eq!(request.path(), "/api/products/");
        assert_eq!(
            request.body(),
            Some(&json!({
                "product": {
                    "name": "Plan Pro",
                    "prices_attributes": [{
                        "amount_in_cents": 10000,
                        "currency": "GTQ",
                        "charge_type": "one_time"
                    }]
                }
            }))
        );
    }

    #[tokio::test]
    async fn list_passes_page_query() {
        let (handler, mock) = handler();

        handler.list(PageArgs { page: Some(2) }).await.unwrap();
        handler.list(PageArgs::default()).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].query(), &[("page".to_string(), "2".to_string())]);
        assert!(requests[1].query().is_empty());
        assert!(requests[1].body().is_none());
    }

    #[tokio::test]
    async fn get_returns_api_body() {
        let (handler, mock) = handler();
        mock.set_response(HttpMethod::Get, "/api/products/prod_1", json!({ "id": "prod_1" }));

        let body = handler
            .get(ResourceIdArgs { id: "prod_1".into() })
            .await
            .unwrap();

        assert_eq!(body, json!({ "id": "prod_1" }));
    }

    #[tokio::test]
    async fn update_patches_without_id_in_body() {
        let (handler, mock) = handler();
        let args: UpdateProductArgs =
            parse_arguments(&json!({ "id": "prod_1", "description": "New" })).unwrap();

        handler.update(args).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.method(), HttpMethod::Patch);
        assert_eq!(request.path(), "/api/products/prod_1");
        assert_eq!(request.body(), Some(&json!({ "product": { "description": "New" } })));
    }

    #[tokio::test]
    async fn delete_sends_no_body() {
        let (handler, mock) = handler();

        handler
            .delete(ResourceIdArgs { id: "prod/1".into() })
            .await
            .unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.method(), HttpMethod::Delete);
        assert_eq!(request.path(), "/api/products/prod%2F1");
        assert!(request.body().is_none());
    }

    #[tokio::test]
    async fn api_errors_propagate() {
        let (handler, mock) = handler();
        mock.set_error(ApiError::from_response(404, r#"{"error":"Not found"}"#));

        let err = handler
            .get(ResourceIdArgs { id: "missing".into() })
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(404));
    }
}
