//! Repository trait abstraction.

use async_trait::async_trait;
use todolist_core::TodoList;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Backend cannot be reached
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Load/save contract for the single [`TodoList`] aggregate.
///
/// Backends hand out detached copies: mutating a loaded list has no effect
/// until it is passed to [`save`](Self::save).
#[async_trait]
pub trait TodoListRepository: Send + Sync {
    /// Load the list, or a new empty one if nothing was saved yet.
    async fn get(&self) -> Result<TodoList>;

    /// Replace the stored list. Saving the same list twice is harmless.
    async fn save(&self, list: &TodoList) -> Result<()>;
}
