//! Recurrente REST API adapter.
//!
//! Implements `ApiClient` over reqwest. Every request carries the key pair
//! in `X-PUBLIC-KEY` / `X-SECRET-KEY` and speaks JSON both ways.
//!
//! # Configuration
//!
//! ```ignore
//! let config = RecurrenteConfig::new(public_key, secret_key)
//!     .with_timeout(Duration::from_secs(10));
//! let client = HttpApiClient::new(config)?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::config::AppConfig;
use crate::ports::{ApiClient, ApiError, ApiRequest, HttpMethod};

pub const DEFAULT_BASE_URL: &str = "https://app.recurrente.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const PUBLIC_KEY_HEADER: &str = "X-PUBLIC-KEY";
const SECRET_KEY_HEADER: &str = "X-SECRET-KEY";
const JSON_CONTENT_TYPE: &str = "application/json";

/// API credentials and transport settings.
#[derive(Clone)]
pub struct RecurrenteConfig {
    public_key: SecretString,
    secret_key: SecretString,

    /// Base URL the request paths are joined onto.
    base_url: String,

    /// Total time allowed per request.
    timeout: Duration,
}

impl RecurrenteConfig {
    pub fn new(public_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            public_key: SecretString::new(public_key.into()),
            secret_key: SecretString::new(secret_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl From<&AppConfig> for RecurrenteConfig {
    fn from(config: &AppConfig) -> Self {
        Self::new(config.public_key.clone(), config.secret_key.clone())
            .with_base_url(config.base_url.clone())
            .with_timeout(config.http.timeout())
    }
}

impl std::fmt::Debug for RecurrenteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecurrenteConfig")
            .field("public_key", &"[REDACTED]")
            .field("secret_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// reqwest-backed `ApiClient`.
pub struct HttpApiClient {
    config: RecurrenteConfig,
    base_url: Url,
    http_client: reqwest::Client,
}

impl HttpApiClient {
    /// Builds the client.
    ///
    /// # Errors
    ///
    /// `InvalidUrl` if the base URL does not parse; `Network` if the TLS
    /// backend cannot be initialised.
    pub fn new(config: RecurrenteConfig) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            config,
            base_url,
            http_client,
        })
    }

    pub fn config(&self) -> &RecurrenteConfig {
        &self.config
    }

    fn build_url(&self, request: &ApiRequest) -> Result<Url, ApiError> {
        let mut url = self
            .base_url
            .join(request.path())
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", request.path(), e)))?;

        if !request.query().is_empty() {
            url.query_pairs_mut().extend_pairs(request.query());
        }

        Ok(url)
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

/// Decodes a 2xx body: empty is `{}`, non-JSON is kept as a string.
pub(crate) fn parse_success_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return json!({});
    }

    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn request(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = self.build_url(&request)?;
        let method = request.method();

        tracing::debug!(method = %method, path = %request.path(), "Sending Recurrente API request");

        let mut builder = self
            .http_client
            .request(to_reqwest_method(method), url)
            .header(PUBLIC_KEY_HEADER, self.config.public_key.expose_secret().as_str())
            .header(SECRET_KEY_HEADER, self.config.secret_key.expose_secret().as_str())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE);

        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(method = %method, path = %request.path(), error = %e, "Recurrente API request failed");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            tracing::error!(
                method = %method,
                path = %request.path(),
                status = status.as_u16(),
                "Recurrente API returned an error status"
            );
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        Ok(parse_success_body(&body))
    }
}
