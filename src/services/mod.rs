//! Orchestration over the repository seam.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod catalog;
pub mod session;
pub mod submission;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Form(#[from] FormError),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
