//! Form definitions backing operator submissions.

use thiserror::Error;
use validator::ValidationErrors;

pub mod product;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("price must be a number greater than zero")]
    InvalidPrice,
}
