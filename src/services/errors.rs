use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Result type returned by every service function.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced to route handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No valid session, or the credentials did not match.
    #[error("unauthorized")]
    Unauthorized,
    /// Authenticated but not allowed to perform the action.
    #[error("forbidden")]
    Forbidden,
    #[error("not found")]
    NotFound,
    /// Illegal lifecycle transition or duplicate key.
    #[error("{0}")]
    Conflict(String),
    /// Invalid submitted data.
    #[error("{0}")]
    Form(String),
    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Conflict(message) => ServiceError::Conflict(message),
            other => ServiceError::Repository(other),
        }
    }
}

impl From<crate::forms::FormError> for ServiceError {
    fn from(err: crate::forms::FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
