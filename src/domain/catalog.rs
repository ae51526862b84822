//! Catalog load lifecycle and the remote/local merge.

use crate::domain::product::Product;

/// Lifecycle of the one-shot remote catalog fetch. Exactly one phase holds
/// at a time; records exist only once the fetch has settled successfully.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum CatalogState {
    /// The request has been issued and has not settled yet.
    #[default]
    Loading,
    /// The request settled with a transport, status, or parse failure.
    Error(String),
    /// The request settled with the service-ordered records.
    Ready(Vec<Product>),
}

impl CatalogState {
    /// Remote records in service order; empty unless the catalog is ready.
    #[must_use]
    pub fn records(&self) -> &[Product] {
        match self {
            Self::Ready(records) => records,
            _ => &[],
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Failure description, present only in the error phase.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Combines remote records with operator-created additions.
///
/// Remote records always precede local ones; relative order within each
/// group is preserved. No de-duplication, sorting, or truncation. While the
/// catalog is loading or failed, the remote contribution is empty.
#[must_use]
pub fn display_list<'a>(catalog: &'a CatalogState, locals: &'a [Product]) -> Vec<&'a Product> {
    catalog.records().iter().chain(locals.iter()).collect()
}
