//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::product::{NewProduct, Product};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CatalogReader, CatalogWriter};

mock! {
    pub Catalog {}

    #[async_trait]
    impl CatalogReader for Catalog {
        async fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    }

    #[async_trait]
    impl CatalogWriter for Catalog {
        async fn create_product(&self, payload: &NewProduct) -> RepositoryResult<Option<Product>>;
    }
}
