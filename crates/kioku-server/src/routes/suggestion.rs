//! Suggestion Routes

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use super::{error_response, ApiError};
use crate::auth::Caller;
use crate::models::{ListSuggestionsQuery, MemoryResponse, SuggestionResponse};
use crate::AppState;

/// List active suggestions, newest first
#[utoipa::path(
    get,
    path = "/kioku/suggestions",
    params(ListSuggestionsQuery),
    responses(
        (status = 200, description = "Active suggestions", body = Vec<SuggestionResponse>),
        (status = 400, description = "Invalid limit")
    ),
    tag = "Suggestion"
)]
pub async fn list_suggestions(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    Query(query): Query<ListSuggestionsQuery>,
) -> Result<Json<Vec<SuggestionResponse>>, ApiError> {
    let suggestions = state
        .suggestion_service
        .list_active(caller, query.limit)
        .await
        .map_err(error_response)?;

    Ok(Json(
        suggestions
            .into_iter()
            .map(SuggestionResponse::from)
            .collect(),
    ))
}

/// Dismiss suggestion
#[utoipa::path(
    post,
    path = "/kioku/suggestions/{id}/dismiss",
    params(
        ("id" = Uuid, Path, description = "Suggestion ID")
    ),
    responses(
        (status = 200, description = "Suggestion dismissed"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Suggestion not found")
    ),
    tag = "Suggestion"
)]
pub async fn dismiss_suggestion(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .suggestion_service
        .dismiss(caller, id)
        .await
        .map_err(error_response)?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Suggestion dismissed"
    })))
}

/// Record that the caller acted on a suggestion
#[utoipa::path(
    post,
    path = "/kioku/suggestions/{id}/action",
    params(
        ("id" = Uuid, Path, description = "Suggestion ID")
    ),
    responses(
        (status = 200, description = "Suggestion marked as acted on"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Suggestion not found")
    ),
    tag = "Suggestion"
)]
pub async fn act_on_suggestion(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .suggestion_service
        .mark_acted(caller, id)
        .await
        .map_err(error_response)?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Suggestion marked as acted on"
    })))
}

/// Memories a suggestion refers to
#[utoipa::path(
    get,
    path = "/kioku/suggestions/{id}/memories",
    params(
        ("id" = Uuid, Path, description = "Suggestion ID")
    ),
    responses(
        (status = 200, description = "Related memories still present", body = Vec<MemoryResponse>),
        (status = 404, description = "Suggestion not found")
    ),
    tag = "Suggestion"
)]
pub async fn related_memories(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<MemoryResponse>>, ApiError> {
    let memories = state
        .suggestion_service
        .related_memories(caller, id, state.memory_service.as_ref())
        .await
        .map_err(error_response)?;

    Ok(Json(memories.into_iter().map(MemoryResponse::from).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/kioku/suggestions", get(list_suggestions))
        .route("/kioku/suggestions/:id/dismiss", post(dismiss_suggestion))
        .route("/kioku/suggestions/:id/action", post(act_on_suggestion))
        .route("/kioku/suggestions/:id/memories", get(related_memories))
}
