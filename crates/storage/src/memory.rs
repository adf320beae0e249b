//! In-memory repository.
//!
//! Keeps the last saved aggregate for the lifetime of the process.

use async_trait::async_trait;
use todolist_core::TodoList;
use tokio::sync::RwLock;

use super::{Result, TodoListRepository};

/// Process-local repository backend.
#[derive(Debug, Default)]
pub struct InMemoryTodoListRepository {
    list: RwLock<Option<TodoList>>,
}

impl InMemoryTodoListRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository already holding `list`.
    pub fn with_list(list: TodoList) -> Self {
        Self {
            list: RwLock::new(Some(list)),
        }
    }
}

#[async_trait]
impl TodoListRepository for InMemoryTodoListRepository {
    async fn get(&self) -> Result<TodoList> {
        let guard = self.list.read().await;
        match guard.as_ref() {
            Some(list) => {
                tracing::debug!("Loaded todo list with {} items", list.len());
                Ok(list.clone())
            }
            None => {
                tracing::debug!("No todo list saved yet, starting empty");
                Ok(TodoList::new())
            }
        }
    }

    async fn save(&self, list: &TodoList) -> Result<()> {
        *self.list.write().await = Some(list.clone());
        tracing::debug!("Saved todo list with {} items", list.len());
        Ok(())
    }
}
