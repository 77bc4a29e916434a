//! Mock API client for testing.
//!
//! Provides a configurable `ApiClient` for unit and integration tests:
//! - Canned responses per method and path
//! - Error injection
//! - Request recording

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::ports::{ApiClient, ApiError, ApiRequest, HttpMethod};

/// Mock API client.
///
/// # Example
///
/// ```
/// use recurrente_mcp::adapters::recurrente::MockApiClient;
/// use recurrente_mcp::ports::HttpMethod;
///
/// let mock = MockApiClient::new();
/// mock.set_response(
///     HttpMethod::Get,
///     "/api/products/prod_1",
///     serde_json::json!({ "id": "prod_1" }),
/// );
/// ```
#[derive(Clone, Default)]
pub struct MockApiClient {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Responses by method and path.
    responses: HashMap<(HttpMethod, String), Result<Value, ApiError>>,

    /// Error to return on the next call, whatever the route.
    next_error: Option<ApiError>,

    /// Every request received, in order.
    requests: Vec<ApiRequest>,
}

impl MockApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Answer requests to `method path` with `body`.
    pub fn set_response(&self, method: HttpMethod, path: impl Into<String>, body: Value) {
        self.state()
            .responses
            .insert((method, path.into()), Ok(body));
    }

    /// Fail requests to `method path` with `error`.
    pub fn set_route_error(&self, method: HttpMethod, path: impl Into<String>, error: ApiError) {
        self.state()
            .responses
            .insert((method, path.into()), Err(error));
    }

    /// Fail the next request with `error`.
    pub fn set_error(&self, error: ApiError) {
        self.state().next_error = Some(error);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Assertions
    // ════════════════════════════════════════════════════════════════════════════

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state().requests.clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.state().requests.last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.state().requests.len()
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    /// Unconfigured routes answer `{}`, like an empty 2xx body.
    async fn request(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let mut state = self.state();
        let key = (request.method(), request.path().to_string());
        state.requests.push(request);

        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        state
            .responses
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Ok(json!({})))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_requests_in_order() {
        let mock = MockApiClient::new();

        mock.request(ApiRequest::get("/api/products")).await.unwrap();
        mock.request(ApiRequest::delete("/api/coupons/cp_1")).await.unwrap();

        let paths: Vec<String> = mock.requests().iter().map(|r| r.path().to_string()).collect();
        assert_eq!(paths, vec!["/api/products", "/api/coupons/cp_1"]);
        assert_eq!(mock.request_count(), 2);
    }

    #[tokio::test]
    async fn unconfigured_route_returns_empty_object() {
        let mock = MockApiClient::new();

        let body = mock.request(ApiRequest::get("/api/customers")).await.unwrap();

        assert_eq!(body, json!({}));
    }

    #[tokio::test]
    async fn configured_route_matches_method_and_path() {
        let mock = MockApiClient::new();
        mock.set_response(HttpMethod::Get, "/api/products/p1", json!({ "id": "p1" }));

        let hit = mock.request(ApiRequest::get("/api/products/p1")).await.unwrap();
        let miss = mock.request(ApiRequest::delete("/api/products/p1")).await.unwrap();

        assert_eq!(hit, json!({ "id": "p1" }));
        assert_eq!(miss, json!({}));
    }

    #[tokio::test]
    async fn next_error_applies_once() {
        let mock = MockApiClient::new();
        mock.set_error(ApiError::Network("down".into()));

        assert!(mock.request(ApiRequest::get("/api/coupons")).await.is_err());
        assert!(mock.request(ApiRequest::get("/api/coupons")).await.is_ok());
    }

    #[tokio::test]
    async fn route_error_is_returned() {
        let mock = MockApiClient::new();
        mock.set_route_error(
            HttpMethod::Delete,
            "/api/subscriptions/su_1",
            ApiError::from_response(404, "{}"),
        );

        let err = mock
            .request(ApiRequest::delete("/api/subscriptions/su_1"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(404));
    }
}
