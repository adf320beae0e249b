//! Service errors.

use todolist_core::{ErrorKind, TodoError};
use todolist_storage::StorageError;

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors surfaced by [`TodoListService`](crate::TodoListService).
///
/// Domain errors pass through untouched; only the presentation layer turns
/// them into user-facing responses.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Rejected by the domain
    #[error(transparent)]
    Domain(#[from] TodoError),

    /// Repository failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ServiceError {
    /// Domain error kind, if this is a domain error.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Domain(err) => Some(err.kind()),
            Self::Storage(_) => None,
        }
    }
}
