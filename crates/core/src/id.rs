//! Identifiers for to-do entities.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::{Result, TodoError};

/// Identity of a [`TodoItem`](crate::TodoItem). Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TodoItemId(u32);

impl TodoItemId {
    /// Create from a raw value, rejecting zero.
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 {
            return Err(TodoError::validation("TodoItem ID must be positive"));
        }
        Ok(Self(value))
    }

    /// The raw integer.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TodoItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<u32> for TodoItemId {
    type Error = TodoError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

/// Unique identifier for a domain event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(Ulid);

impl EventId {
    /// Generate a new EventId
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
