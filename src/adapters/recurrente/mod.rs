//! Recurrente API adapters.
//!
//! - `HttpApiClient` - reqwest implementation of `ApiClient`
//! - `MockApiClient` - In-memory client for tests

mod http_client;
mod mock_client;

pub use http_client::{HttpApiClient, RecurrenteConfig, DEFAULT_BASE_URL};
pub use mock_client::MockApiClient;
