//! HTTP routes.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use rucksack_domain::{Player, PlayerId};
use rucksack_shared::{
    ActionResponse, AddItemResponse, ErrorResponse, ItemActionRequest, NewItemData, ResetResponse,
};
use tower_http::trace::TraceLayer;

use crate::app::App;
use crate::infrastructure::correlation::correlation_middleware;

use super::responses;

/// Routes with per-request correlation and HTTP tracing applied.
pub fn router(app: Arc<App>) -> Router {
    routes()
        .with_state(app)
        .layer(middleware::from_fn(correlation_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/init", post(reset_player))
        .route("/player/{id}", get(get_player))
        .route("/player/{id}/use", post(use_item))
        .route("/player/{id}/discard", post(discard_item))
        .route("/player/{id}/items", post(add_item))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Player
// =============================================================================

async fn reset_player(State(app): State<Arc<App>>) -> Result<Json<ResetResponse>, ApiError> {
    let player = app.use_cases.player.reset_player.execute().await?;
    Ok(Json(responses::reset(player)))
}

async fn get_player(
    State(app): State<Arc<App>>,
    id: Result<Path<PlayerId>, PathRejection>,
) -> Result<Json<Player>, ApiError> {
    let Path(id) = id?;
    let player = app.use_cases.player.get_player.execute(&id).await?;
    Ok(Json(player))
}

// =============================================================================
// Inventory
// =============================================================================

async fn use_item(
    State(app): State<Arc<App>>,
    id: Result<Path<PlayerId>, PathRejection>,
    body: Result<Json<ItemActionRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>, ApiError> {
    let Path(id) = id?;
    let Json(request) = body?;
    let result = app
        .use_cases
        .inventory
        .use_item
        .execute(&id, &request.item_id)
        .await?;
    Ok(Json(responses::used(&result)))
}

async fn discard_item(
    State(app): State<Arc<App>>,
    id: Result<Path<PlayerId>, PathRejection>,
    body: Result<Json<ItemActionRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>, ApiError> {
    let Path(id) = id?;
    let Json(request) = body?;
    let result = app
        .use_cases
        .inventory
        .discard_item
        .execute(&id, &request.item_id)
        .await?;
    Ok(Json(responses::discarded(&result)))
}

async fn add_item(
    State(app): State<Arc<App>>,
    id: Result<Path<PlayerId>, PathRejection>,
    body: Result<Json<NewItemData>, JsonRejection>,
) -> Result<Json<AddItemResponse>, ApiError> {
    let Path(id) = id?;
    let Json(data) = body?;
    let item = app.use_cases.inventory.add_item.execute(&id, data).await?;
    Ok(Json(responses::added(item)))
}

// =============================================================================
// Errors
// =============================================================================

/// Error returned by every handler, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Unavailable(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::Conflict(msg)
            | ApiError::Unavailable(msg) => msg,
        };
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        ApiError::BadRequest(format!("Ungültige Anfrage: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request path");
        ApiError::BadRequest(format!("Ungültige Anfrage: {}", rejection.body_text()))
    }
}
