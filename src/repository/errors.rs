use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("unexpected status {0}")]
    BadStatus(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response body: {0}")]
    Malformed(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::Malformed(err.to_string())
        } else if let Some(status) = err.status() {
            RepositoryError::BadStatus(status.as_u16())
        } else {
            RepositoryError::Transport(err.to_string())
        }
    }
}
