//! The fetch helper: GET a URL and resolve to parsed JSON.
//!
//! [`Fetcher`] is the seam between the widgets and the network. Production code
//! uses [`HttpFetcher`]; tests use [`mock::MockFetcher`].

pub mod error;
pub mod http;
pub mod mock;
pub mod products_api;

pub use error::*;
pub use http::*;
pub use products_api::*;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;

/// Performs GET requests that answer with JSON.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Resolves with the parsed body when the response status is a success,
    /// otherwise rejects with the status text.
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// GETs `url` and decodes the body into `T`.
#[instrument(skip(fetcher))]
pub async fn get<T: DeserializeOwned>(fetcher: &dyn Fetcher, url: &str) -> Result<T, FetchError> {
    let body = fetcher.get_json(url).await?;
    serde_json::from_value(body).map_err(|e| FetchError::Decode(e.to_string()))
}
