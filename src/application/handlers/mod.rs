//! Application handlers.
//!
//! One handler per resource. Each operation turns typed tool arguments into
//! an `ApiRequest`, sends it through the `ApiClient` port and hands back the
//! decoded response.

mod checkouts;
mod coupons;
mod customers;
mod products;
mod subscriptions;
mod webhooks;

pub use checkouts::CheckoutsHandler;
pub use coupons::CouponsHandler;
pub use customers::CustomersHandler;
pub use products::ProductsHandler;
pub use subscriptions::SubscriptionsHandler;
pub use webhooks::VerifyWebhookHandler;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::ports::ApiError;

/// `collection/{id}` with the ID encoded as a single path segment.
pub(crate) fn resource_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, urlencoding::encode(id))
}

/// Serializes `body` under a single top-level key: `{"<key>": body}`.
pub(crate) fn wrapped_body<T: Serialize>(key: &str, body: &T) -> Result<Value, ApiError> {
    let inner = serde_json::to_value(body).map_err(|e| ApiError::Serialization(e.to_string()))?;

    let mut envelope = Map::new();
    envelope.insert(key.to_string(), inner);
    Ok(Value::Object(envelope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resource_path_appends_id() {
        assert_eq!(resource_path("/api/products", "prod_123"), "/api/products/prod_123");
    }

    #[test]
    fn resource_path_encodes_separators() {
        assert_eq!(
            resource_path("/api/products", "../admin?x=1"),
            "/api/products/..%2Fadmin%3Fx%3D1"
        );
        assert_eq!(resource_path("/api/coupons", "a b#c"), "/api/coupons/a%20b%23c");
    }

    #[test]
    fn wrapped_body_nests_under_key() {
        let body = wrapped_body("product", &json!({ "name": "Plan" })).unwrap();

        assert_eq!(body, json!({ "product": { "name": "Plan" } }));
    }
}
