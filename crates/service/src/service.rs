//! To-do list application service.

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use todolist_core::{
    Category, DomainEvent, EventOutbox, Percentage, Time, TodoError, TodoItemId,
};
use todolist_storage::TodoListRepository;

use crate::config::ServiceConfig;
use crate::dto::TodoItemDto;
use crate::error::{Result, ServiceError};

/// Application service over a [`TodoListRepository`].
///
/// Every mutation runs get → apply → save as one critical section, so
/// concurrent callers are serialized per service instance. A failed
/// operation saves nothing and publishes no event.
pub struct TodoListService<R: TodoListRepository> {
    repository: R,
    config: ServiceConfig,
    outbox: Mutex<EventOutbox>,
    write_lock: Mutex<()>,
}

impl<R: TodoListRepository> TodoListService<R> {
    /// Create a new service.
    pub fn new(repository: R, config: ServiceConfig) -> Self {
        Self {
            repository,
            config,
            outbox: Mutex::new(EventOutbox::new()),
            write_lock: Mutex::new(()),
        }
    }

    /// Service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Create an item filed under `category`.
    pub async fn add_item(
        &self,
        title: &str,
        description: &str,
        category: &str,
    ) -> Result<TodoItemDto> {
        let category = Category::parse(category, &self.config.categories)
            .map_err(|e| rejected("add_item", e))?;

        let _guard = self.write_lock.lock().await;
        let mut list = self.repository.get().await?;
        let (item, event) = list
            .add_item(title, description, category)
            .map_err(|e| rejected("add_item", e))?;
        let dto = TodoItemDto::from(item);

        self.repository.save(&list).await?;
        info!(id = dto.id, title = %dto.title, "Item added");
        self.publish(event).await;
        Ok(dto)
    }

    /// Fetch one item.
    pub async fn get_item(&self, id: u32) -> Result<TodoItemDto> {
        let id = parse_id(id)?;
        let list = self.repository.get().await?;
        let item = list.get_item(id).map_err(|e| rejected("get_item", e))?;
        Ok(TodoItemDto::from(item))
    }

    /// All items ordered by id.
    pub async fn list_items(&self) -> Result<Vec<TodoItemDto>> {
        let list = self.repository.get().await?;
        debug!("Listing {} items", list.len());
        Ok(list.items_sorted().into_iter().map(TodoItemDto::from).collect())
    }

    /// Replace an item's description.
    pub async fn update_item(&self, id: u32, description: &str) -> Result<TodoItemDto> {
        let id = parse_id(id)?;

        let _guard = self.write_lock.lock().await;
        let mut list = self.repository.get().await?;
        let event = list
            .update_item(id, description)
            .map_err(|e| rejected("update_item", e))?;
        let dto = TodoItemDto::from(list.get_item(id)?);

        self.repository.save(&list).await?;
        info!(id = dto.id, "Item updated");
        self.publish(event).await;
        Ok(dto)
    }

    /// Delete an item.
    pub async fn remove_item(&self, id: u32) -> Result<()> {
        let id = parse_id(id)?;

        let _guard = self.write_lock.lock().await;
        let mut list = self.repository.get().await?;
        let (_, event) = list
            .remove_item(id)
            .map_err(|e| rejected("remove_item", e))?;

        self.repository.save(&list).await?;
        info!(id = id.value(), "Item removed");
        self.publish(event).await;
        Ok(())
    }

    /// Record progress on an item.
    pub async fn register_progression(
        &self,
        id: u32,
        date: Time,
        percentage: Percentage,
    ) -> Result<TodoItemDto> {
        let id = parse_id(id)?;

        let _guard = self.write_lock.lock().await;
        let mut list = self.repository.get().await?;
        let (item, event) = list
            .register_progression(id, date, percentage)
            .map_err(|e| rejected("register_progression", e))?;
        let dto = TodoItemDto::from(item);

        self.repository.save(&list).await?;
        info!(id = dto.id, %percentage, total = %dto.total_progress, "Progression registered");
        self.publish(event).await;
        Ok(dto)
    }

    /// Configured category labels.
    pub fn categories(&self) -> Vec<String> {
        self.config.categories.labels().to_vec()
    }

    /// Published events not yet cleared, oldest first.
    pub async fn events(&self) -> Vec<DomainEvent> {
        self.outbox.lock().await.events().to_vec()
    }

    /// Clear published events, returning how many were dropped.
    pub async fn clear_events(&self) -> usize {
        let cleared = self.outbox.lock().await.clear();
        debug!("Cleared {} events", cleared);
        cleared
    }

    async fn publish(&self, event: DomainEvent) {
        debug!(event = event.kind.name(), item = %event.item_id, "Publishing event");
        self.outbox.lock().await.push(event);
    }
}

fn parse_id(id: u32) -> Result<TodoItemId> {
    TodoItemId::new(id).map_err(|e| rejected("parse_id", e))
}

fn rejected(operation: &'static str, err: TodoError) -> ServiceError {
    warn!(operation, kind = %err.kind(), "{}", err);
    ServiceError::Domain(err)
}
