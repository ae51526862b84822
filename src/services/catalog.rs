use crate::domain::catalog::{CatalogState, display_list};
use crate::domain::product::Product;
use crate::dto::catalog::{CatalogPage, ProductRow};
use crate::repository::CatalogReader;

/// Performs the one-shot catalog fetch and folds the outcome into a settled
/// [`CatalogState`].
///
/// Every failure mode (transport, non-2xx status, malformed body) lands in
/// the error phase with a human-readable message; nothing propagates and
/// nothing retries. The loading phase ends exactly once, when the returned
/// future resolves.
pub async fn load_catalog<R>(repo: &R) -> CatalogState
where
    R: CatalogReader + ?Sized,
{
    match repo.list_products().await {
        Ok(products) => CatalogState::Ready(products),
        Err(err) => {
            log::error!("Failed to load product catalog: {err}");
            CatalogState::Error(err.to_string())
        }
    }
}

/// Assembles the render-ready page for the current catalog phase.
///
/// While the catalog is loading or failed, the page carries the message to
/// show instead of the table; the merged list is only built once the remote
/// fetch has settled successfully.
#[must_use]
pub fn catalog_page(catalog: &CatalogState, locals: &[Product]) -> CatalogPage {
    match catalog {
        CatalogState::Loading => CatalogPage::Loading,
        CatalogState::Error(message) => CatalogPage::Error {
            message: message.clone(),
        },
        CatalogState::Ready(_) => CatalogPage::Table {
            rows: display_list(catalog, locals)
                .into_iter()
                .map(ProductRow::from)
                .collect(),
        },
    }
}
