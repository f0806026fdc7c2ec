use super::{get, FetchError, Fetcher};
use crate::model::{PaginatedResult, Product};
use std::sync::Arc;
use tracing::debug;

/// Paged access to the product catalogue.
#[derive(Clone)]
pub struct ProductsApi {
    fetcher: Arc<dyn Fetcher>,
    endpoint: String,
}

impl ProductsApi {
    pub fn new(fetcher: Arc<dyn Fetcher>, endpoint: impl Into<String>) -> Self {
        Self {
            fetcher,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// URL of one page, e.g. `/api/products?page=2&limit=10`.
    pub fn page_url(&self, page: u32, limit: u32) -> String {
        format!("{}?page={}&limit={}", self.endpoint, page, limit)
    }

    pub async fn page(&self, page: u32, limit: u32) -> Result<PaginatedResult<Product>, FetchError> {
        let url = self.page_url(page, limit);
        debug!(%url, "Fetching products page");
        let result: PaginatedResult<Product> = get(self.fetcher.as_ref(), &url).await?;
        result.validate().map_err(FetchError::Decode)?;
        Ok(result)
    }
}

impl std::fmt::Debug for ProductsApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductsApi")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
