//! Reminder Routes

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use super::{error_response, ApiError};
use crate::auth::Caller;
use crate::models::{CreateReminderRequest, ReminderResponse};
use crate::AppState;

/// List open reminders, earliest due first
#[utoipa::path(
    get,
    path = "/kioku/reminders",
    responses(
        (status = 200, description = "Pending reminders", body = Vec<ReminderResponse>)
    ),
    tag = "Reminder"
)]
pub async fn list_reminders(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
) -> Result<Json<Vec<ReminderResponse>>, ApiError> {
    let reminders = state
        .reminder_service
        .list_pending(caller)
        .await
        .map_err(error_response)?;

    Ok(Json(reminders.into_iter().map(ReminderResponse::from).collect()))
}

/// Create new reminder
#[utoipa::path(
    post,
    path = "/kioku/reminders",
    request_body = CreateReminderRequest,
    responses(
        (status = 200, description = "Reminder created", body = ReminderResponse),
        (status = 400, description = "Invalid fields"),
        (status = 401, description = "Not authenticated")
    ),
    tag = "Reminder"
)]
pub async fn create_reminder(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    Json(payload): Json<CreateReminderRequest>,
) -> Result<Json<ReminderResponse>, ApiError> {
    let reminder = state
        .reminder_service
        .create(caller, payload.into())
        .await
        .map_err(error_response)?;

    Ok(Json(reminder.into()))
}

/// Mark reminder completed
#[utoipa::path(
    post,
    path = "/kioku/reminders/{id}/complete",
    params(
        ("id" = Uuid, Path, description = "Reminder ID")
    ),
    responses(
        (status = 200, description = "Reminder completed"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Reminder not found")
    ),
    tag = "Reminder"
)]
pub async fn complete_reminder(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .reminder_service
        .complete(caller, id)
        .await
        .map_err(error_response)?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Reminder completed"
    })))
}

/// Delete reminder
#[utoipa::path(
    delete,
    path = "/kioku/reminders/{id}",
    params(
        ("id" = Uuid, Path, description = "Reminder ID")
    ),
    responses(
        (status = 200, description = "Reminder deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Reminder not found")
    ),
    tag = "Reminder"
)]
pub async fn delete_reminder(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .reminder_service
        .delete(caller, id)
        .await
        .map_err(error_response)?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Reminder deleted"
    })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/kioku/reminders", get(list_reminders).post(create_reminder))
        .route("/kioku/reminders/:id", delete(delete_reminder))
        .route("/kioku/reminders/:id/complete", post(complete_reminder))
}
