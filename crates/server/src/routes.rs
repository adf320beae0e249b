//! API routes.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use todolist_core::DomainEvent;
use todolist_service::{
    CreateRequest, RegisterProgressionRequest, TodoItemDto, TodoListService, UpdateRequest,
};
use todolist_storage::TodoListRepository;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::error::ApiError;

type ServiceState<R> = Arc<TodoListService<R>>;
type ApiResult<T> = Result<T, ApiError>;

/// Build the full application router over `service`.
pub fn router<R>(service: ServiceState<R>) -> Router
where
    R: TodoListRepository + 'static,
{
    Router::new()
        .merge(todo_routes::<R>())
        .merge(event_routes::<R>())
        .merge(health_routes::<R>())
        .with_state(service)
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Item Routes
// ============================================================================

fn todo_routes<R: TodoListRepository + 'static>() -> Router<ServiceState<R>> {
    Router::new()
        .route("/api/todolist", get(list_items::<R>).post(create_item::<R>))
        .route(
            "/api/todolist/:id",
            get(get_item::<R>)
                .put(update_item::<R>)
                .delete(remove_item::<R>),
        )
        .route(
            "/api/todolist/:id/progression",
            post(register_progression::<R>),
        )
        .route("/api/todolist/categories", get(categories::<R>))
        .route("/api/categories", get(categories::<R>))
}

async fn list_items<R: TodoListRepository>(
    State(service): State<ServiceState<R>>,
) -> ApiResult<Json<Vec<TodoItemDto>>> {
    Ok(Json(service.list_items().await?))
}

async fn get_item<R: TodoListRepository>(
    State(service): State<ServiceState<R>>,
    Path(id): Path<u32>,
) -> ApiResult<Json<TodoItemDto>> {
    Ok(Json(service.get_item(id).await?))
}

async fn create_item<R: TodoListRepository>(
    State(service): State<ServiceState<R>>,
    body: Result<Json<CreateRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(req) = body?;
    let item = service
        .add_item(&req.title, &req.description, &req.category)
        .await?;
    let location = format!("/api/todolist/{}", item.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(item)))
}

async fn update_item<R: TodoListRepository>(
    State(service): State<ServiceState<R>>,
    Path(id): Path<u32>,
    body: Result<Json<UpdateRequest>, JsonRejection>,
) -> ApiResult<Json<TodoItemDto>> {
    let Json(req) = body?;
    Ok(Json(service.update_item(id, &req.description).await?))
}

async fn remove_item<R: TodoListRepository>(
    State(service): State<ServiceState<R>>,
    Path(id): Path<u32>,
) -> ApiResult<StatusCode> {
    service.remove_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn register_progression<R: TodoListRepository>(
    State(service): State<ServiceState<R>>,
    Path(id): Path<u32>,
    body: Result<Json<RegisterProgressionRequest>, JsonRejection>,
) -> ApiResult<Json<TodoItemDto>> {
    let Json(req) = body?;
    let item = service
        .register_progression(id, req.date, req.percentage)
        .await?;
    Ok(Json(item))
}

async fn categories<R: TodoListRepository>(
    State(service): State<ServiceState<R>>,
) -> Json<Vec<String>> {
    Json(service.categories())
}

// ============================================================================
// Event Routes
// ============================================================================

fn event_routes<R: TodoListRepository + 'static>() -> Router<ServiceState<R>> {
    Router::new().route("/api/events", get(list_events::<R>).delete(clear_events::<R>))
}

async fn list_events<R: TodoListRepository>(
    State(service): State<ServiceState<R>>,
) -> Json<Vec<DomainEvent>> {
    Json(service.events().await)
}

async fn clear_events<R: TodoListRepository>(
    State(service): State<ServiceState<R>>,
) -> Json<Value> {
    let cleared = service.clear_events().await;
    Json(json!({ "cleared": cleared }))
}

// ============================================================================
// Health Routes
// ============================================================================

fn health_routes<R: TodoListRepository + 'static>() -> Router<ServiceState<R>> {
    Router::new().route("/diagnostics/ping", get(ping))
}

async fn ping() -> Json<Value> {
    debug!("Health check");
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}
