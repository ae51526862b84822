//! Product creation against the remote service and the submission
//! lifecycle shown to the operator.

use crate::domain::product::{NewProduct, Product};
use crate::repository::CatalogWriter;
use crate::services::{ServiceError, ServiceResult};

/// Message shown after a successful submission.
pub const CREATE_SUCCESS_MESSAGE: &str = "Product added successfully.";

/// Generic message shown when the creation request fails for any reason.
pub const CREATE_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Phase of the submission lifecycle. A successful submission settles back
/// at `Idle` carrying the success message; a failed one rests at `Failed`
/// with the draft intact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Failed,
}

/// Current submission phase plus the operator-facing message, if any.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SubmissionStatus {
    pub phase: SubmissionPhase,
    pub message: Option<String>,
}

impl SubmissionStatus {
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn validating() -> Self {
        Self {
            phase: SubmissionPhase::Validating,
            message: None,
        }
    }

    #[must_use]
    pub fn submitting() -> Self {
        Self {
            phase: SubmissionPhase::Submitting,
            message: None,
        }
    }

    /// Resting state after a successful submission.
    #[must_use]
    pub fn accepted() -> Self {
        Self {
            phase: SubmissionPhase::Idle,
            message: Some(CREATE_SUCCESS_MESSAGE.to_string()),
        }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            phase: SubmissionPhase::Failed,
            message: Some(message.into()),
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.phase == SubmissionPhase::Failed
    }
}

/// Issues the single creation request and resolves the record to append to
/// the local additions.
///
/// The service may answer with an empty or malformed body; in that case the
/// payload that was sent becomes the displayed record.
pub async fn create_product<R>(repo: &R, payload: &NewProduct) -> ServiceResult<Product>
where
    R: CatalogWriter + ?Sized,
{
    let echoed = repo.create_product(payload).await.map_err(|err| {
        log::error!("Failed to create product: {err}");
        ServiceError::from(err)
    })?;

    Ok(echoed.unwrap_or_else(|| payload.clone().into_product()))
}
