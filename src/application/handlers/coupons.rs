//! CouponsHandler - discount coupon operations.

use std::sync::Arc;

use serde_json::Value;

use super::{resource_path, wrapped_body};
use crate::domain::tools::definitions::{
    CreateCouponArgs, PageArgs, ResourceIdArgs, UpdateCouponArgs,
};
use crate::ports::{ApiClient, ApiError, ApiRequest};

const COUPONS_PATH: &str = "/api/coupons";

pub struct CouponsHandler {
    client: Arc<dyn ApiClient>,
}

impl CouponsHandler {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create(&self, args: CreateCouponArgs) -> Result<Value, ApiError> {
        let request = ApiRequest::post(COUPONS_PATH).with_body(wrapped_body("coupon", &args)?);
        self.client.request(request).await
    }

    pub async fn list(&self, args: PageArgs) -> Result<Value, ApiError> {
        let request = ApiRequest::get(COUPONS_PATH).with_query("page", args.page);
        self.client.request(request).await
    }

    pub async fn get(&self, args: ResourceIdArgs) -> Result<Value, ApiError> {
        let request = ApiRequest::get(resource_path(COUPONS_PATH, &args.id));
        self.client.request(request).await
    }

    pub async fn update(&self, args: UpdateCouponArgs) -> Result<Value, ApiError> {
        let request = ApiRequest::patch(resource_path(COUPONS_PATH, &args.id))
            .with_body(wrapped_body("coupon", &args)?);
        self.client.request(request).await
    }

    pub async fn delete(&self, args: ResourceIdArgs) -> Result<Value, ApiError> {
        let request = ApiRequest::delete(resource_path(COUPONS_PATH, &args.id));
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

    fn handler() -> (CouponsHandler, MockApiClient) {
        let mock = MockApiClient::new();
        (CouponsHandler::new(Arc::new(mock.clone())), mock)
    }

    #[tokio::test]
    async fn create_posts_wrapped_coupon() {
        let (handler, mock) = handler();
        let args: CreateCouponArgs = parse_arguments(&json!({
            "name": "BIENVENIDA",
            "amount_off_in_cents": 500,
            "currency": "GTQ",
            "duration": "forever"
        }))
        .unwrap();

        handler.create(args).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.method(), HttpMethod::Post);
        assert_eq!(request.path(), "/api/coupons");
        assert_eq!(
            request.body(),
            Some(&json!({
                "coupon": {
                    "name": "BIENVENIDA",
                    "amount_off_in_cents": 500,
                    "currency": "GTQ",
                    "duration": "forever"
                }
            }))
        );
    }

    #[tokio::test]
    async fn update_patches_wrapped_changes() {
        let (handler, mock) = handler();
        let args: UpdateCouponArgs =
            parse_arguments(&json!({ "id": "cp_1", "redeem_by": "2025-12-31" })).unwrap();

        handler.update(args).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.method(), HttpMethod::Patch);
        assert_eq!(request.path(), "/api/coupons/cp_1");
        assert_eq!(
            request.body(),
            Some(&json!({ "coupon": { "redeem_by": "2025-12-31" } }))
        );
    }

    #[tokio::test]
    async fn delete_uses_coupon_path() {
        let (handler, mock) = handler();

        handler
            .delete(ResourceIdArgs { id: "cp_1".into() })
            .await
            .unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.method(), HttpMethod::Delete);
        assert_eq!(request.path(), "/api/coupons/cp_1");
    }
}
