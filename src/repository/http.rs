//! HTTP implementation of the catalog repository traits.

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::product::{NewProduct, Product};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CatalogReader, CatalogWriter};

/// Catalog repository backed by the remote HTTP service.
///
/// Issues plain requests with no retry, timeout, or cancellation; callers
/// own the decision of when (and how often) to call.
#[derive(Debug, Clone)]
pub struct HttpCatalogRepository {
    client: Client,
    base_url: String,
}

impl HttpCatalogRepository {
    /// Creates a repository for the given service base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }
}

#[async_trait]
impl CatalogReader for HttpCatalogRepository {
    async fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        let response = self
            .client
            .get(self.products_url())
            .send()
            .await?
            .error_for_status()?;
        let products = response.json::<Vec<Product>>().await?;
        Ok(products)
    }
}

#[async_trait]
impl CatalogWriter for HttpCatalogRepository {
    async fn create_product(&self, payload: &NewProduct) -> RepositoryResult<Option<Product>> {
        let response = self
            .client
            .post(self.products_url())
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        // An empty or malformed success body is tolerated; the caller falls
        // back to the payload it sent.
        Ok(response.json::<Product>().await.ok())
    }
}
