//! API client port for the Recurrente REST API.
//!
//! The contract is deliberately thin: perform one HTTP request with a method,
//! a path, optional query parameters and an optional JSON body against the
//! configured base URL and key pair, and surface non-2xx responses as errors.
//! Retries, pagination and caching are left to callers (or to the API itself).

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Port for issuing authenticated requests to the payments API.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Sends the request and returns the decoded response body.
    ///
    /// An empty 2xx body decodes to `{}`; a 2xx body that is not JSON is
    /// returned as a JSON string.
    async fn request(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request to the API.
///
/// # Example
///
/// ```
/// use recurrente_mcp::ports::{ApiRequest, HttpMethod};
///
/// let request = ApiRequest::get("/api/checkouts")
///     .with_query("user_id", Some("us_123"))
///     .with_query("page", None::<u32>);
///
/// assert_eq!(request.method(), HttpMethod::Get);
/// assert_eq!(request.query().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Adds a query parameter. `None` values are left out of the URL.
    pub fn with_query(mut self, key: &str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.query.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Sets the JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serializes `body` and sets it as the JSON body.
    pub fn with_json<T: Serialize + ?Sized>(self, body: &T) -> Result<Self, ApiError> {
        let value =
            serde_json::to_value(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(self.with_body(value))
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// Errors from API requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The API answered with a non-2xx status.
    #[error("Recurrente API error {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The base URL and path could not be combined into a URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Builds a status error from a raw response body.
    ///
    /// JSON bodies are pretty-printed into the detail; anything else is kept
    /// verbatim.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| serde_json::to_string_pretty(&json).ok())
            .unwrap_or_else(|| body.to_string());

        ApiError::Status { status, detail }
    }

    /// Returns the HTTP status for status errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
