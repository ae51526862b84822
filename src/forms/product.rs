use serde::Deserialize;
use validator::Validate;

use crate::domain::product::NewProduct;
use crate::forms::FormError;

/// Draft of the add-product form.
///
/// The draft is held while the form is open, cleared on successful
/// submission, and left untouched on failure so the operator can correct
/// and resubmit without losing input. The price stays a string until
/// validation converts it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AddProductForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "price is required"))]
    pub price: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    /// Encoded payload produced by the file picker; sent to the service.
    #[serde(default)]
    pub image_data: Option<String>,
    /// Displayable form of the same selection, kept so the operator sees
    /// exactly the image they picked rather than a lossy round-trip.
    #[serde(default)]
    pub image_preview: Option<String>,
}

impl AddProductForm {
    /// Records an image selection. The picker yields a single encoded string
    /// that serves as both the outgoing payload and the preview.
    pub fn set_image(&mut self, encoded: impl Into<String>) {
        let encoded = encoded.into();
        self.image_data = Some(encoded.clone());
        self.image_preview = Some(encoded);
    }

    /// Resets every field to its initial empty state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl TryFrom<&AddProductForm> for NewProduct {
    type Error = FormError;

    /// Validates the draft and converts it into a creation payload. The
    /// image is optional; creation proceeds without one.
    fn try_from(form: &AddProductForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let price: f64 = form
            .price
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidPrice)?;
        if price <= 0.0 {
            return Err(FormError::InvalidPrice);
        }

        Ok(NewProduct {
            name: form.name.clone(),
            price,
            description: form.description.clone(),
            category: form.category.clone(),
            image: form.image_data.clone().filter(|data| !data.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> AddProductForm {
        AddProductForm {
            name: "Widget".to_string(),
            price: "9.99".to_string(),
            description: "d".to_string(),
            category: "c".to_string(),
            ..AddProductForm::default()
        }
    }

    #[test]
    fn test_rejects_zero_price() {
        let mut form = draft();
        form.price = "0".to_string();
        assert!(matches!(
            NewProduct::try_from(&form),
            Err(FormError::InvalidPrice)
        ));
    }

    #[test]
    fn test_rejects_negative_price() {
        let mut form = draft();
        form.price = "-5".to_string();
        assert!(matches!(
            NewProduct::try_from(&form),
            Err(FormError::InvalidPrice)
        ));
    }

    #[test]
    fn test_rejects_non_numeric_price() {
        let mut form = draft();
        form.price = "free".to_string();
        assert!(matches!(
            NewProduct::try_from(&form),
            Err(FormError::InvalidPrice)
        ));
    }

    #[test]
    fn test_accepts_cent_price() {
        let mut form = draft();
        form.price = "0.01".to_string();
        let payload = NewProduct::try_from(&form).unwrap();
        assert_eq!(payload.price, 0.01);
    }

    #[test]
    fn test_rejects_empty_name() {
        let mut form = draft();
        form.name.clear();
        assert!(matches!(
            NewProduct::try_from(&form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn test_absent_image_still_converts() {
        let payload = NewProduct::try_from(&draft()).unwrap();
        assert_eq!(payload.image, None);
    }

    #[test]
    fn test_image_selection_fills_payload_and_preview() {
        let mut form = draft();
        form.set_image("data:image/png;base64,QUJD");
        let payload = NewProduct::try_from(&form).unwrap();
        assert_eq!(
            payload.image.as_deref(),
            Some("data:image/png;base64,QUJD")
        );
        assert_eq!(
            form.image_preview.as_deref(),
            Some("data:image/png;base64,QUJD")
        );
    }

    #[test]
    fn test_clear_resets_draft() {
        let mut form = draft();
        form.set_image("QUJD");
        form.clear();
        assert!(form.name.is_empty());
        assert!(form.price.is_empty());
        assert_eq!(form.image_data, None);
        assert_eq!(form.image_preview, None);
    }
}
