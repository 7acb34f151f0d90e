use bball_core::entry::ValidationError;
use bball_core::event::ErrorKind;
use bball_core::storage::RepositoryError;
use thiserror::Error;

/// Failure of a service operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// Classifies the error for the response envelope.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Validation(_) => ErrorKind::InvalidArgument,
            ServiceError::Repository(_) => ErrorKind::Internal,
        }
    }
}

/// Errors that fail the invocation itself instead of producing a response.
///
/// The runtime records these as function errors, which drives its retry
/// and dead-letter handling.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvocationError {
    #[error("Intentional test failure")]
    TestFailure,
}
