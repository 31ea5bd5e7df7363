use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod config;
mod models;
mod routes;

use adapters::{
    PgMemoryRepository, PgReminderRepository, PgSuggestionRepository, SignedTokenIdentity,
    SignedUrlBlobStore,
};
use application::{MemoryService, ReminderService, SuggestionService};
use config::ServerConfig;
use kioku::IdentityProvider;

/// Type aliases for application services with concrete adapter implementations
pub type AppMemoryService = MemoryService<PgMemoryRepository, SignedUrlBlobStore>;
pub type AppReminderService = ReminderService<PgReminderRepository>;
pub type AppSuggestionService = SuggestionService<PgSuggestionRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub memory_service: Arc<AppMemoryService>,
    pub reminder_service: Arc<AppReminderService>,
    pub suggestion_service: Arc<AppSuggestionService>,
}

#[derive(Serialize, ToSchema)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthCheck)
    ),
    tag = "Health"
)]
async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Kioku API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("📔 Kioku API initializing...");

    let config = ServerConfig::from_secrets(&secrets)?;

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("✅ Database migrations completed");

    // Identity
    let identity: Arc<dyn IdentityProvider> = match &config.auth_secret {
        Some(secret) => {
            tracing::info!("🔐 Bearer token authentication enabled");
            Arc::new(SignedTokenIdentity::new(secret.clone()))
        }
        None => {
            tracing::warn!("⚠️  No KIOKU_AUTH_SECRET set - every caller is anonymous");
            Arc::new(SignedTokenIdentity::anonymous_only())
        }
    };

    // Blob storage
    let blobs = match config.blob.clone() {
        Some(blob) => {
            tracing::info!("🗂️  Blob storage at {}", blob.base_url);
            Arc::new(SignedUrlBlobStore::new(blob))
        }
        None => {
            tracing::warn!("⚠️  No BLOB_BASE_URL / BLOB_SIGNING_SECRET set - media disabled");
            Arc::new(SignedUrlBlobStore::disabled())
        }
    };

    // Initialize application services
    let memory_repo = Arc::new(PgMemoryRepository::new(pool.clone()));
    let reminder_repo = Arc::new(PgReminderRepository::new(pool.clone()));
    let suggestion_repo = Arc::new(PgSuggestionRepository::new(pool));

    let state = AppState {
        memory_service: Arc::new(MemoryService::new(memory_repo, blobs)),
        reminder_service: Arc::new(ReminderService::new(reminder_repo)),
        suggestion_service: Arc::new(SuggestionService::new(
            suggestion_repo,
            config.suggestion_limit,
        )),
    };

    // Caller-scoped routes (identity resolved by middleware)
    let api_routes = Router::new()
        .merge(routes::memory::router())
        .merge(routes::reminder::router())
        .merge(routes::suggestion::router())
        .layer(middleware::from_fn_with_state(identity, auth::auth_middleware));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Kioku API ready");

    Ok(router.into())
}
