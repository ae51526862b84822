use async_trait::async_trait;

use crate::domain::product::{NewProduct, Product};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use http::HttpCatalogRepository;

/// Read access to the remote product catalog.
#[async_trait]
pub trait CatalogReader {
    /// Fetches the full catalog in service order.
    async fn list_products(&self) -> RepositoryResult<Vec<Product>>;
}

/// Write access to the remote product catalog.
#[async_trait]
pub trait CatalogWriter {
    /// Creates a product. Returns the echoed record when the service
    /// provides a well-formed one; the service is not required to.
    async fn create_product(&self, payload: &NewProduct) -> RepositoryResult<Option<Product>>;
}
