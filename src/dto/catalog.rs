//! DTOs shaped for the catalog table.

use serde::Serialize;

use crate::domain::image;
use crate::domain::product::Product;

/// One table row with the image resolved to a displayable URI.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductRow {
    /// Row key: service id when present, else the name.
    pub key: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub rating: Option<f64>,
    /// Rating count, rendered as the stock column.
    pub stock: Option<u32>,
    pub image_uri: Option<String>,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            key: product.list_key(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
            rating: product.rating.as_ref().map(|rating| rating.rate),
            stock: product.rating.as_ref().map(|rating| rating.count),
            image_uri: image::normalize(product.image.as_ref()),
        }
    }
}

/// What the renderer shows for the session: a progress line, an error line,
/// or the merged table. The table only exists once the remote fetch has
/// settled successfully.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum CatalogPage {
    Loading,
    Error { message: String },
    Table { rows: Vec<ProductRow> },
}
