use serde::{Deserialize, Serialize};

use crate::domain::image::{self, ImagePayload};

/// Aggregated operator rating attached to catalog records by some service
/// variants. Locally created records carry no rating until the service
/// returns a fuller document.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub rate: f64,
    /// Number of ratings; doubles as the stock column in the rendered table.
    pub count: u32,
}

/// A single catalog record, remote or locally created.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Product {
    /// Stable identifier assigned by the catalog service. Absent on locally
    /// created records the service has not echoed back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    /// Image in any of the wire encodings; unknown shapes decode to `None`.
    #[serde(
        default,
        deserialize_with = "image::deserialize_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<ImagePayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Key identifying this record within a displayed list: the service id
    /// when present, else the name. Unique only within one list.
    #[must_use]
    pub fn list_key(&self) -> String {
        match self.id {
            Some(id) => id.to_string(),
            None => self.name.clone(),
        }
    }
}

/// Creation payload sent to the catalog service.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    /// Encoded image string, omitted from the document when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl NewProduct {
    /// Builds the record to display when the service does not echo the
    /// created document back.
    #[must_use]
    pub fn into_product(self) -> Product {
        Product {
            id: None,
            name: self.name,
            category: self.category,
            price: self.price,
            description: self.description,
            image: self.image.and_then(ImagePayload::from_text),
            rating: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_list_key_prefers_id() {
        let product = Product {
            id: Some(7),
            name: "Widget".to_string(),
            ..Product::default()
        };
        assert_eq!(product.list_key(), "7");
    }

    #[test]
    fn test_list_key_falls_back_to_name() {
        let product = Product {
            name: "Widget".to_string(),
            ..Product::default()
        };
        assert_eq!(product.list_key(), "Widget");
    }

    #[test]
    fn test_deserializes_full_catalog_record() {
        let product: Product = serde_json::from_value(json!({
            "id": 1,
            "name": "Backpack",
            "category": "bags",
            "price": 109.95,
            "description": "Fits 15 inch laptops",
            "image": "data:image/png;base64,QUJD",
            "rating": { "rate": 3.9, "count": 120 }
        }))
        .unwrap();

        assert_eq!(product.id, Some(1));
        assert_eq!(product.rating, Some(Rating { rate: 3.9, count: 120 }));
        assert_eq!(
            product.image,
            Some(ImagePayload::EmbeddedUri(
                "data:image/png;base64,QUJD".to_string()
            ))
        );
    }

    #[test]
    fn test_payload_without_image_omits_field() {
        let payload = NewProduct {
            name: "Widget".to_string(),
            price: 9.99,
            description: "d".to_string(),
            category: "c".to_string(),
            image: None,
        };
        let document = serde_json::to_value(&payload).unwrap();
        assert!(document.get("image").is_none());
    }

    #[test]
    fn test_fallback_record_has_no_id_or_rating() {
        let payload = NewProduct {
            name: "Widget".to_string(),
            price: 9.99,
            description: "d".to_string(),
            category: "c".to_string(),
            image: Some("QUJD".to_string()),
        };
        let product = payload.into_product();
        assert_eq!(product.id, None);
        assert_eq!(product.rating, None);
        assert_eq!(product.image, Some(ImagePayload::RawText("QUJD".to_string())));
    }
}
