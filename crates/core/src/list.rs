//! The to-do list aggregate root.

use std::collections::HashMap;

use crate::category::Category;
use crate::error::{Result, TodoError};
use crate::event::{DomainEvent, DomainEventKind};
use crate::id::TodoItemId;
use crate::item::TodoItem;
use crate::percentage::Percentage;
use crate::progression::Progression;
use crate::Time;

/// Owns every [`TodoItem`] and is the only way to create or remove one.
///
/// Ids start at 1, strictly increase and are never reused, even after a
/// removal. Every successful mutation returns the [`DomainEvent`] it produced;
/// the list itself keeps no event log.
#[derive(Debug, Clone)]
pub struct TodoList {
    items: HashMap<TodoItemId, TodoItem>,
    next_id: u32,
}

impl TodoList {
    /// An empty list.
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            next_id: 1,
        }
    }

    /// Create an item under the next free id.
    pub fn add_item(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
    ) -> Result<(&TodoItem, DomainEvent)> {
        let id = TodoItemId::new(self.next_id)?;
        let following = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| TodoError::validation("TodoItem ID space exhausted"))?;

        let item = TodoItem::new(id, title, description, category)?;
        let event = DomainEvent::new(
            id,
            DomainEventKind::ItemAdded {
                title: item.title().to_string(),
                category: item.category().clone(),
            },
        );

        self.next_id = following;
        let item = self.items.entry(id).or_insert(item);
        Ok((&*item, event))
    }

    /// Look up an item.
    pub fn get_item(&self, id: TodoItemId) -> Result<&TodoItem> {
        self.items.get(&id).ok_or(TodoError::NotFound(id))
    }

    /// Replace an item's description, unless it is locked.
    pub fn update_item(
        &mut self,
        id: TodoItemId,
        description: impl Into<String>,
    ) -> Result<DomainEvent> {
        let item = self.items.get_mut(&id).ok_or(TodoError::NotFound(id))?;
        if !item.can_be_modified() {
            return Err(TodoError::Locked {
                id,
                action: "update",
            });
        }

        item.update_description(description)?;
        Ok(DomainEvent::new(
            id,
            DomainEventKind::ItemUpdated {
                description: item.description().to_string(),
            },
        ))
    }

    /// Remove an item, unless it is locked. Returns the removed item.
    pub fn remove_item(&mut self, id: TodoItemId) -> Result<(TodoItem, DomainEvent)> {
        let item = self.get_item(id)?;
        if !item.can_be_modified() {
            return Err(TodoError::Locked {
                id,
                action: "remove",
            });
        }

        let item = self.items.remove(&id).ok_or(TodoError::NotFound(id))?;
        Ok((item, DomainEvent::new(id, DomainEventKind::ItemRemoved)))
    }

    /// Record progress on an item. Allowed on locked items.
    pub fn register_progression(
        &mut self,
        id: TodoItemId,
        date: Time,
        percentage: Percentage,
    ) -> Result<(&TodoItem, DomainEvent)> {
        let item = self.items.get_mut(&id).ok_or(TodoError::NotFound(id))?;
        let progression = Progression::new(date, percentage)?;

        item.register_progression(progression)?;
        let event = DomainEvent::new(
            id,
            DomainEventKind::ProgressionRegistered { date, percentage },
        );
        Ok((&*item, event))
    }

    /// All items, in no particular order.
    pub fn items(&self) -> Vec<&TodoItem> {
        self.items.values().collect()
    }

    /// All items ordered by id.
    pub fn items_sorted(&self) -> Vec<&TodoItem> {
        let mut items = self.items();
        items.sort_by_key(|item| item.id());
        items
    }

    /// Whether an item with this id exists.
    pub fn contains(&self, id: TodoItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The id the next [`add_item`](Self::add_item) will use.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CategorySet;
    use chrono::{TimeZone, Utc};

    fn work() -> Category {
        Category::parse("Work", &CategorySet::default()).unwrap()
    }

    fn day(d: u32) -> Time {
        Utc.with_ymd_and_hms(2025, 3, d, 0, 0, 0).unwrap()
    }

    fn id(value: u32) -> TodoItemId {
        TodoItemId::new(value).unwrap()
    }

    fn add(list: &mut TodoList, title: &str) -> TodoItemId {
        let (item, _) = list.add_item(title, "Lorem Ipsum", work()).unwrap();
        item.id()
    }

    #[test]
    fn test_scenario_progress_to_completion() {
        let mut list = TodoList::new();
        let (item, event) = list.add_item("Task", "Lorem Ipsum", work()).unwrap();
        assert_eq!(item.id().value(), 1);
        assert!(matches!(event.kind, DomainEventKind::ItemAdded { .. }));

        let (item, _) = list
            .register_progression(id(1), day(18), Percentage::whole(30))
            .unwrap();
        assert_eq!(item.total_progress(), Percentage::whole(30));
        assert!(!item.is_completed());

        let (item, _) = list
            .register_progression(id(1), day(19), Percentage::whole(50))
            .unwrap();
        assert_eq!(item.total_progress(), Percentage::whole(80));
        assert!(!item.is_completed());

        let (item, event) = list
            .register_progression(id(1), day(20), Percentage::whole(20))
            .unwrap();
        assert_eq!(item.total_progress(), Percentage::HUNDRED);
        assert!(item.is_completed());
        assert_eq!(
            event.kind,
            DomainEventKind::ProgressionRegistered {
                date: day(20),
                percentage: Percentage::whole(20),
            }
        );
    }

    #[test]
    fn test_locked_item_cannot_be_removed() {
        let mut list = TodoList::new();
        let item_id = add(&mut list, "Task");
        list.register_progression(item_id, day(18), Percentage::whole(60))
            .unwrap();

        let err = list.remove_item(item_id).unwrap_err();
        assert!(matches!(err, TodoError::Locked { action: "remove", .. }));
        assert!(list.contains(item_id));
    }

    #[test]
    fn test_locked_item_cannot_be_updated() {
        let mut list = TodoList::new();
        let item_id = add(&mut list, "Task");
        list.register_progression(item_id, day(18), Percentage::whole(51))
            .unwrap();

        let err = list.update_item(item_id, "changed").unwrap_err();
        assert!(matches!(err, TodoError::Locked { action: "update", .. }));
        assert_eq!(list.get_item(item_id).unwrap().description(), "Lorem Ipsum");

        // progress keeps flowing
        let (item, _) = list
            .register_progression(item_id, day(19), Percentage::whole(49))
            .unwrap();
        assert!(item.is_completed());
    }

    #[test]
    fn test_update_and_remove_below_threshold() {
        let mut list = TodoList::new();
        let item_id = add(&mut list, "Task");
        list.register_progression(item_id, day(18), Percentage::whole(50))
            .unwrap();

        let event = list.update_item(item_id, "changed").unwrap();
        assert_eq!(
            event.kind,
            DomainEventKind::ItemUpdated {
                description: "changed".to_string()
            }
        );
        assert_eq!(list.get_item(item_id).unwrap().description(), "changed");

        let (removed, event) = list.remove_item(item_id).unwrap();
        assert_eq!(removed.id(), item_id);
        assert_eq!(event.kind, DomainEventKind::ItemRemoved);
        assert!(list.is_empty());
    }

    #[test]
    fn test_unknown_id_not_found() {
        let mut list = TodoList::new();
        let missing = id(9);
        assert_eq!(list.get_item(missing).unwrap_err(), TodoError::NotFound(missing));
        assert_eq!(
            list.update_item(missing, "x").unwrap_err(),
            TodoError::NotFound(missing)
        );
        assert_eq!(
            list.remove_item(missing).unwrap_err(),
            TodoError::NotFound(missing)
        );
        assert_eq!(
            list.register_progression(missing, day(1), Percentage::whole(1))
                .unwrap_err(),
            TodoError::NotFound(missing)
        );
    }

    #[test]
    fn test_ids_never_reused() {
        let mut list = TodoList::new();
        let first = add(&mut list, "a");
        let second = add(&mut list, "b");
        list.remove_item(second).unwrap();
        let third = add(&mut list, "c");

        assert_eq!(first.value(), 1);
        assert_eq!(second.value(), 2);
        assert_eq!(third.value(), 3);
    }

    #[test]
    fn test_failed_add_leaves_list_unchanged() {
        let mut list = TodoList::new();
        assert!(list.add_item(" ", "desc", work()).is_err());
        assert!(list.is_empty());
        assert_eq!(list.next_id(), 1);
        assert_eq!(add(&mut list, "ok").value(), 1);
    }

    #[test]
    fn test_progression_validation_and_order() {
        let mut list = TodoList::new();
        let item_id = add(&mut list, "Task");

        for bad in [Percentage::ZERO, Percentage::whole(101)] {
            let err = list.register_progression(item_id, day(18), bad).unwrap_err();
            assert!(matches!(err, TodoError::Validation(_)));
        }

        list.register_progression(item_id, day(18), Percentage::whole(30))
            .unwrap();
        let err = list
            .register_progression(item_id, day(17), Percentage::whole(10))
            .unwrap_err();
        assert!(matches!(err, TodoError::OutOfOrder { .. }));

        let item = list.get_item(item_id).unwrap();
        assert_eq!(item.history().len(), 1);
        assert_eq!(item.total_progress(), Percentage::whole(30));
    }

    #[test]
    fn test_items_sorted() {
        let mut list = TodoList::new();
        for title in ["a", "b", "c", "d"] {
            add(&mut list, title);
        }
        list.remove_item(id(2)).unwrap();

        let ids: Vec<u32> = list.items_sorted().iter().map(|i| i.id().value()).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert_eq!(list.items().len(), 3);
    }
}
