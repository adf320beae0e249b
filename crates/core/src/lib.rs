//! Todolist core domain.
//!
//! Items accumulate dated progressions toward 100%. An item past 50% total
//! progress is locked against edits and removal but may still progress.
//! [`TodoList`] is the aggregate root that owns every item.

#![warn(missing_docs)]

// Identities and errors
mod id;
mod error;

// Value objects
mod category;
mod percentage;
mod progression;

// Entities
mod item;
mod list;
mod event;

// Re-exports
pub use id::{EventId, TodoItemId};
pub use error::{ErrorKind, Result, TodoError};

pub use category::{Category, CategorySet, DEFAULT_CATEGORIES};
pub use percentage::Percentage;
pub use progression::{Progression, ProgressionHistory};

pub use item::{TodoItem, LOCK_THRESHOLD};
pub use list::TodoList;
pub use event::{DomainEvent, DomainEventKind, EventOutbox};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
