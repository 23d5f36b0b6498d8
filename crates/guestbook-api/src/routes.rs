use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;

use guestbook_core::GuestbookError;
use guestbook_domain::{Message, MessagePage};

use crate::service::MessageService;

/// The API surface: one listing route, one creation route.
pub fn router(service: Arc<MessageService>) -> Router {
    Router::new()
        .route("/api/v1/messages", get(list_messages))
        .route("/api/v1/message", post(create_message))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    #[serde(default = "first_page")]
    page: i64,
}

fn first_page() -> i64 {
    1
}

/// `GET /api/v1/messages?page=n`: one page of messages, newest first.
/// Out-of-range pages are clamped, not rejected; non-integer pages are a
/// 400 from query deserialization before this handler runs.
async fn list_messages(
    State(service): State<Arc<MessageService>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<MessagePage>, ApiError> {
    let page = service.list(query.page).await?;
    Ok(Json(page))
}

/// `POST /api/v1/message`: persist a submission, reply 201 with no body.
async fn create_message(
    State(service): State<Arc<MessageService>>,
    Json(message): Json<Message>,
) -> Result<StatusCode, ApiError> {
    service.create(message).await?;
    Ok(StatusCode::CREATED)
}

/// Maps domain errors onto HTTP responses with a JSON error body.
struct ApiError(GuestbookError);

impl From<GuestbookError> for ApiError {
    fn from(error: GuestbookError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            GuestbookError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        } else {
            tracing::debug!("Request rejected: {}", self.0);
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
