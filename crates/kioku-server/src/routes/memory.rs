//! Memory Routes - Journaled moments, timeline, map and uploads
//!
//! HTTP handlers that delegate to MemoryService for business logic.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use kioku::{MemoryDraft, MemoryType, Mood};

use super::{error_response, ApiError};
use crate::auth::Caller;
use crate::models::{
    MapConnectionResponse, MapNodeResponse, MemoryIdResponse, MemoryMapResponse, MemoryRequest,
    MemoryResponse, UploadTargetResponse,
};
use crate::AppState;

fn into_responses(memories: Vec<kioku::ResolvedMemory>) -> Vec<MemoryResponse> {
    memories.into_iter().map(MemoryResponse::from).collect()
}

/// List the caller's memories
#[utoipa::path(
    get,
    path = "/kioku/memories",
    responses(
        (status = 200, description = "Caller's memories in store order", body = Vec<MemoryResponse>),
        (status = 502, description = "Blob storage unavailable")
    ),
    tag = "Memory"
)]
pub async fn list_memories(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
) -> Result<Json<Vec<MemoryResponse>>, ApiError> {
    let memories = state
        .memory_service
        .list(caller)
        .await
        .map_err(error_response)?;

    Ok(Json(into_responses(memories)))
}

/// Create new memory
#[utoipa::path(
    post,
    path = "/kioku/memories",
    request_body = MemoryRequest,
    responses(
        (status = 200, description = "Memory created", body = MemoryIdResponse),
        (status = 400, description = "Invalid fields"),
        (status = 401, description = "Not authenticated")
    ),
    tag = "Memory"
)]
pub async fn create_memory(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    Json(payload): Json<MemoryRequest>,
) -> Result<Json<MemoryIdResponse>, ApiError> {
    let draft = MemoryDraft::try_from(payload).map_err(error_response)?;
    let id = state
        .memory_service
        .create(caller, draft)
        .await
        .map_err(error_response)?;

    Ok(Json(MemoryIdResponse { id }))
}

/// Get memory by ID
#[utoipa::path(
    get,
    path = "/kioku/memories/{id}",
    params(
        ("id" = Uuid, Path, description = "Memory ID")
    ),
    responses(
        (status = 200, description = "Memory found", body = MemoryResponse),
        (status = 404, description = "Memory not found")
    ),
    tag = "Memory"
)]
pub async fn get_memory(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    Path(id): Path<Uuid>,
) -> Result<Json<MemoryResponse>, ApiError> {
    let memory = state
        .memory_service
        .get(caller, id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| error_response(kioku::DomainError::not_found("Memory")))?;

    Ok(Json(memory.into()))
}

/// Replace memory
#[utoipa::path(
    put,
    path = "/kioku/memories/{id}",
    params(
        ("id" = Uuid, Path, description = "Memory ID")
    ),
    request_body = MemoryRequest,
    responses(
        (status = 200, description = "Memory updated", body = MemoryIdResponse),
        (status = 400, description = "Invalid fields"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Memory not found")
    ),
    tag = "Memory"
)]
pub async fn update_memory(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    Path(id): Path<Uuid>,
    Json(payload): Json<MemoryRequest>,
) -> Result<Json<MemoryIdResponse>, ApiError> {
    let draft = MemoryDraft::try_from(payload).map_err(error_response)?;
    let id = state
        .memory_service
        .update(caller, id, draft)
        .await
        .map_err(error_response)?;

    Ok(Json(MemoryIdResponse { id }))
}

/// Delete memory
#[utoipa::path(
    delete,
    path = "/kioku/memories/{id}",
    params(
        ("id" = Uuid, Path, description = "Memory ID")
    ),
    responses(
        (status = 200, description = "Memory deleted", body = MemoryIdResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Memory not found")
    ),
    tag = "Memory"
)]
pub async fn delete_memory(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    Path(id): Path<Uuid>,
) -> Result<Json<MemoryIdResponse>, ApiError> {
    let id = state
        .memory_service
        .delete(caller, id)
        .await
        .map_err(error_response)?;

    Ok(Json(MemoryIdResponse { id }))
}

/// List memories of one type, newest first
#[utoipa::path(
    get,
    path = "/kioku/memories/by-type/{memory_type}",
    params(
        ("memory_type" = String, Path, description = "event, photo, music, video, calendar or thought")
    ),
    responses(
        (status = 200, description = "Matching memories", body = Vec<MemoryResponse>),
        (status = 400, description = "Unknown memory type")
    ),
    tag = "Memory"
)]
pub async fn list_memories_by_type(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    Path(memory_type): Path<String>,
) -> Result<Json<Vec<MemoryResponse>>, ApiError> {
    let memory_type: MemoryType = memory_type
        .parse()
        .map_err(|e: String| error_response(kioku::DomainError::invalid(e)))?;

    let memories = state
        .memory_service
        .list_by_type(caller, memory_type)
        .await
        .map_err(error_response)?;

    Ok(Json(into_responses(memories)))
}

/// List thoughts with one mood, newest first
#[utoipa::path(
    get,
    path = "/kioku/memories/by-mood/{mood}",
    params(
        ("mood" = String, Path, description = "Mood of the thought")
    ),
    responses(
        (status = 200, description = "Matching memories", body = Vec<MemoryResponse>),
        (status = 400, description = "Unknown mood")
    ),
    tag = "Memory"
)]
pub async fn list_memories_by_mood(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    Path(mood): Path<String>,
) -> Result<Json<Vec<MemoryResponse>>, ApiError> {
    let mood: Mood = mood
        .parse()
        .map_err(|e: String| error_response(kioku::DomainError::invalid(e)))?;

    let memories = state
        .memory_service
        .list_by_mood(caller, mood)
        .await
        .map_err(error_response)?;

    Ok(Json(into_responses(memories)))
}

/// Memories ordered newest first
#[utoipa::path(
    get,
    path = "/kioku/timeline",
    responses(
        (status = 200, description = "Timeline", body = Vec<MemoryResponse>)
    ),
    tag = "Memory"
)]
pub async fn timeline(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
) -> Result<Json<Vec<MemoryResponse>>, ApiError> {
    let memories = state
        .memory_service
        .timeline(caller)
        .await
        .map_err(error_response)?;

    Ok(Json(into_responses(memories)))
}

/// Memories placed on a circle with tag connections
#[utoipa::path(
    get,
    path = "/kioku/map",
    responses(
        (status = 200, description = "Memory map", body = MemoryMapResponse)
    ),
    tag = "Memory"
)]
pub async fn memory_map(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
) -> Result<Json<MemoryMapResponse>, ApiError> {
    let map = state
        .memory_service
        .map(caller)
        .await
        .map_err(error_response)?;

    Ok(Json(MemoryMapResponse {
        nodes: map.nodes.into_iter().map(MapNodeResponse::from).collect(),
        connections: map
            .edges
            .into_iter()
            .map(MapConnectionResponse::from)
            .collect(),
    }))
}

/// Request an upload target for photo or video media
#[utoipa::path(
    post,
    path = "/kioku/uploads",
    responses(
        (status = 200, description = "Upload target issued", body = UploadTargetResponse),
        (status = 401, description = "Not authenticated"),
        (status = 502, description = "Blob storage unavailable")
    ),
    tag = "Memory"
)]
pub async fn request_upload(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
) -> Result<Json<UploadTargetResponse>, ApiError> {
    let target = state
        .memory_service
        .request_upload_target(caller)
        .await
        .map_err(error_response)?;

    Ok(Json(target.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/kioku/memories", get(list_memories).post(create_memory))
        .route(
            "/kioku/memories/:id",
            get(get_memory).put(update_memory).delete(delete_memory),
        )
        .route(
            "/kioku/memories/by-type/:memory_type",
            get(list_memories_by_type),
        )
        .route("/kioku/memories/by-mood/:mood", get(list_memories_by_mood))
        .route("/kioku/timeline", get(timeline))
        .route("/kioku/map", get(memory_map))
        .route("/kioku/uploads", post(request_upload))
}
