use framelink_core::{repositories::Error as RepoError, usecases::Error as UsecaseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] UsecaseError),
    #[error("The store is unavailable: {0}")]
    StoreUnavailable(#[from] anyhow::Error),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(UsecaseError::Repo(err))
    }
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Business(err) if err.is_not_found())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Business(err) if err.is_validation())
    }

    /// Transient failures of the store that could succeed
    /// if the command is repeated.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::StoreUnavailable(_) | Self::Business(UsecaseError::Repo(RepoError::Other(_)))
        )
    }
}
