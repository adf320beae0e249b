//! Mapping service errors onto HTTP responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use todolist_core::{ErrorKind, TodoError};
use todolist_service::ServiceError;
use tracing::{error, warn};

/// A [`ServiceError`] on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

/// Malformed or invalid request bodies are reported as validation errors.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        warn!(status = %rejection.status(), "Rejected request body: {}", message);
        Self(ServiceError::Domain(TodoError::validation(message)))
    }
}

/// Status code for a domain error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Locked | ErrorKind::OutOfOrder => StatusCode::CONFLICT,
        ErrorKind::Overflow => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = match self.0.kind() {
            Some(kind) => (status_for(kind), kind.as_str()),
            None => (StatusCode::INTERNAL_SERVER_ERROR, "storage"),
        };
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }
        let body = json!({ "error": self.0.to_string(), "kind": kind });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todolist_core::TodoItemId;
    use todolist_storage::StorageError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::Validation), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::Locked), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorKind::OutOfOrder), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorKind::Overflow), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_response_status() {
        let id = TodoItemId::new(4).unwrap();
        let resp = ApiError(ServiceError::Domain(TodoError::NotFound(id))).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = ApiError(ServiceError::Storage(StorageError::Other("disk".into())))
            .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
