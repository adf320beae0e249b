//! Domain errors.

use serde::Serialize;

use crate::id::TodoItemId;
use crate::percentage::Percentage;
use crate::Time;

/// Result type for domain operations.
pub type Result<T> = std::result::Result<T, TodoError>;

/// Errors raised by the to-do domain.
///
/// Every check runs before any state change, so an operation that returns
/// one of these has left the aggregate untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoError {
    /// Malformed input
    #[error("{0}")]
    Validation(String),

    /// No item with this id in the list
    #[error("TodoItem with ID {0} was not found")]
    NotFound(TodoItemId),

    /// Item progress is past the lock threshold
    #[error("Cannot {action} item {id} with more than 50% progress")]
    Locked {
        /// Item that refused the mutation
        id: TodoItemId,
        /// Verb describing the refused mutation ("update", "remove")
        action: &'static str,
    },

    /// Progression date is not after the latest recorded one
    #[error("Progression date {} must be after the latest progression date {}", .date.format("%Y-%m-%d"), .latest.format("%Y-%m-%d"))]
    OutOfOrder {
        /// Rejected date
        date: Time,
        /// Latest accepted date
        latest: Time,
    },

    /// Progression would take the total above 100%
    #[error("Total progress cannot exceed 100%. Current: {current}%, Attempting to add: {attempted}%")]
    Overflow {
        /// Total before the attempt
        current: Percentage,
        /// Rejected increment
        attempted: Percentage,
    },
}

impl TodoError {
    /// Shorthand for a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// The taxonomy kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Locked { .. } => ErrorKind::Locked,
            Self::OutOfOrder { .. } => ErrorKind::OutOfOrder,
            Self::Overflow { .. } => ErrorKind::Overflow,
        }
    }
}

/// Kind of a [`TodoError`], used by presentation layers to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed input
    Validation,
    /// Unknown item
    NotFound,
    /// Lock threshold exceeded
    Locked,
    /// Progression out of chronological order
    OutOfOrder,
    /// Total progress overflow
    Overflow,
}

impl ErrorKind {
    /// Stable snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Locked => "locked",
            Self::OutOfOrder => "out_of_order",
            Self::Overflow => "overflow",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
