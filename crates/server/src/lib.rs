//! HTTP API for the to-do list.
//!
//! A thin translator: requests map onto [`TodoListService`] calls and
//! service errors map onto status codes in [`error`].

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use anyhow::Result;
use todolist_service::TodoListService;
use todolist_storage::InMemoryTodoListRepository;
use tracing::info;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::router;

/// Run the HTTP server until it fails.
pub async fn run(config: ServerConfig) -> Result<()> {
    let service = Arc::new(TodoListService::new(
        InMemoryTodoListRepository::new(),
        config.service,
    ));
    let app = router(service);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
