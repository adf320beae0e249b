//! Todolist application layer.
//!
//! Loads the aggregate from a repository, applies one operation, saves it
//! back and publishes the resulting domain event.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod service;

pub use config::ServiceConfig;
pub use dto::{
    parse_date, CreateRequest, ProgressionDto, RegisterProgressionRequest, TodoItemDto,
    UpdateRequest,
};
pub use error::{Result, ServiceError};
pub use service::TodoListService;
