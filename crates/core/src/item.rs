//! To-do items.

use serde::Serialize;

use crate::category::Category;
use crate::error::{Result, TodoError};
use crate::id::TodoItemId;
use crate::percentage::Percentage;
use crate::progression::{Progression, ProgressionHistory};

/// Total progress above which an item can no longer be edited or removed.
pub const LOCK_THRESHOLD: Percentage = Percentage::whole(50);

/// A to-do item with its progression history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoItem {
    id: TodoItemId,
    title: String,
    description: String,
    category: Category,
    history: ProgressionHistory,
}

impl TodoItem {
    /// Create an item with an empty history.
    ///
    /// Title and description must not be blank.
    pub fn new(
        id: TodoItemId,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
    ) -> Result<Self> {
        let title = title.into();
        let description = description.into();

        if title.trim().is_empty() {
            return Err(TodoError::validation("Title cannot be empty"));
        }
        if description.trim().is_empty() {
            return Err(TodoError::validation("Description cannot be empty"));
        }

        Ok(Self {
            id,
            title,
            description,
            category,
            history: ProgressionHistory::new(),
        })
    }

    /// Replace the description.
    ///
    /// Fails when blank, or with [`TodoError::Locked`] once progress is past
    /// [`LOCK_THRESHOLD`].
    pub fn update_description(&mut self, description: impl Into<String>) -> Result<()> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(TodoError::validation("Description cannot be empty"));
        }
        if !self.can_be_modified() {
            return Err(TodoError::Locked {
                id: self.id,
                action: "update",
            });
        }
        self.description = description;
        Ok(())
    }

    /// Record progress. Not subject to the lock: a locked item can still
    /// progress to completion.
    pub fn register_progression(&mut self, progression: Progression) -> Result<()> {
        self.history.add_progression(progression)
    }

    /// True while total progress is at most [`LOCK_THRESHOLD`].
    pub fn can_be_modified(&self) -> bool {
        self.total_progress() <= LOCK_THRESHOLD
    }

    /// True when total progress is exactly 100%.
    pub fn is_completed(&self) -> bool {
        self.history.is_completed()
    }

    /// Sum of recorded progressions.
    pub fn total_progress(&self) -> Percentage {
        self.history.total_progress()
    }

    /// Item identity.
    pub fn id(&self) -> TodoItemId {
        self.id
    }

    /// Item title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Item category.
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Recorded progressions.
    pub fn history(&self) -> &ProgressionHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CategorySet;
    use chrono::{TimeZone, Utc};

    fn item() -> TodoItem {
        let category = Category::parse("Work", &CategorySet::default()).unwrap();
        TodoItem::new(TodoItemId::new(1).unwrap(), "Task", "Lorem Ipsum", category).unwrap()
    }

    fn progress(item: &mut TodoItem, day: u32, percent: u32) -> Result<()> {
        let date = Utc.with_ymd_and_hms(2025, 3, day, 0, 0, 0).unwrap();
        item.register_progression(Progression::new(date, Percentage::whole(percent))?)
    }

    #[test]
    fn test_blank_fields_rejected() {
        let category = Category::parse("Work", &CategorySet::default()).unwrap();
        let id = TodoItemId::new(1).unwrap();
        assert!(TodoItem::new(id, "  ", "desc", category.clone()).is_err());
        assert!(TodoItem::new(id, "title", "\t", category).is_err());
    }

    #[test]
    fn test_new_item_is_empty() {
        let item = item();
        assert_eq!(item.title(), "Task");
        assert_eq!(item.category().as_str(), "Work");
        assert!(item.history().is_empty());
        assert_eq!(item.total_progress(), Percentage::ZERO);
        assert!(!item.is_completed());
        assert!(item.can_be_modified());
    }

    #[test]
    fn test_update_at_threshold_allowed() {
        let mut item = item();
        progress(&mut item, 1, 50).unwrap();
        assert!(item.can_be_modified());
        item.update_description("New").unwrap();
        assert_eq!(item.description(), "New");
    }

    #[test]
    fn test_update_past_threshold_locked() {
        let mut item = item();
        progress(&mut item, 1, 51).unwrap();
        assert!(!item.can_be_modified());

        let err = item.update_description("New").unwrap_err();
        assert!(matches!(err, TodoError::Locked { action: "update", .. }));
        assert_eq!(item.description(), "Lorem Ipsum");
    }

    #[test]
    fn test_update_blank_rejected() {
        let mut item = item();
        assert!(matches!(
            item.update_description(" "),
            Err(TodoError::Validation(_))
        ));
    }

    #[test]
    fn test_locked_item_still_progresses() {
        let mut item = item();
        progress(&mut item, 1, 60).unwrap();
        progress(&mut item, 2, 40).unwrap();
        assert!(item.is_completed());
    }
}
