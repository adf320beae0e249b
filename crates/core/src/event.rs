//! Domain events - what happened to the list.

use crate::category::Category;
use crate::id::{EventId, TodoItemId};
use crate::percentage::Percentage;
use crate::Time;
use serde::Serialize;

/// An event emitted by a successful [`TodoList`](crate::TodoList) mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainEvent {
    /// Unique identifier
    pub id: EventId,

    /// Item the event is about
    pub item_id: TodoItemId,

    /// When it happened
    pub occurred_at: Time,

    /// What happened
    pub kind: DomainEventKind,
}

impl DomainEvent {
    /// Create an event stamped with the current time.
    pub fn new(item_id: TodoItemId, kind: DomainEventKind) -> Self {
        Self {
            id: EventId::new(),
            item_id,
            occurred_at: chrono::Utc::now(),
            kind,
        }
    }
}

/// The kinds of domain event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEventKind {
    /// An item was created
    ItemAdded {
        /// Title at creation
        title: String,
        /// Category at creation
        category: Category,
    },

    /// An item's description changed
    ItemUpdated {
        /// The new description
        description: String,
    },

    /// An item was removed
    ItemRemoved,

    /// Progress was recorded on an item
    ProgressionRegistered {
        /// Progression date
        date: Time,
        /// Progression increment
        percentage: Percentage,
    },
}

impl DomainEventKind {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ItemAdded { .. } => "item_added",
            Self::ItemUpdated { .. } => "item_updated",
            Self::ItemRemoved => "item_removed",
            Self::ProgressionRegistered { .. } => "progression_registered",
        }
    }
}

/// Ordered, append-only log of domain events awaiting publication.
///
/// The owner decides when to clear it, typically after handing the events to
/// an external collaborator.
#[derive(Debug, Clone, Default)]
pub struct EventOutbox {
    events: Vec<DomainEvent>,
}

impl EventOutbox {
    /// An empty outbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: DomainEvent) {
        self.events.push(event);
    }

    /// Pending events, oldest first.
    pub fn events(&self) -> &[DomainEvent] {
        &self.events
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop all pending events, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let n = self.events.len();
        self.events.clear();
        n
    }

    /// Take all pending events, leaving the outbox empty.
    pub fn drain(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }
}
