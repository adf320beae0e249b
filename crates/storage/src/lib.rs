//! Persistence for the to-do list aggregate.
//!
//! This crate provides the repository contract the application layer loads
//! and saves through, with an in-memory reference implementation.

#![warn(missing_docs)]

pub mod trait_;
pub mod memory;

pub use trait_::{TodoListRepository, StorageError, Result};
pub use memory::InMemoryTodoListRepository;
