//! Kioku API Routes
//!
//! - /kioku/memories - Memory CRUD and filtered lists
//! - /kioku/timeline - Memories newest first
//! - /kioku/map - Memories laid out on a circle
//! - /kioku/uploads - Upload targets for media
//! - /kioku/reminders - Reminder management
//! - /kioku/suggestions - AI suggestions

use axum::http::StatusCode;

use kioku::DomainError;

pub mod memory;
pub mod reminder;
pub mod suggestion;
pub mod swagger;

/// Error half of every handler result
pub type ApiError = (StatusCode, String);

/// Map a domain error to an HTTP status and message
pub fn error_response(err: DomainError) -> ApiError {
    match err {
        DomainError::Unauthenticated => (StatusCode::UNAUTHORIZED, err.to_string()),
        DomainError::NotFoundOrUnauthorized { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        DomainError::InvalidArgument(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        DomainError::Repository(_) => {
            tracing::error!("{}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
        DomainError::ExternalService(_) => {
            tracing::warn!("{}", err);
            (StatusCode::BAD_GATEWAY, err.to_string())
        }
    }
}
