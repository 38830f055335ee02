//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use fileshelf_core::traits::cache::CacheProvider;
use fileshelf_core::traits::repository::Repository;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /health
///
/// Responds 503 when either backend is unreachable.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = state.store.health_check().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Document store health check failed");
        false
    });
    let cache = state.cache.health_check().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Cache health check failed");
        false
    });

    let healthy = database && cache;
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthResponse {
            status: if healthy { "ok" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database,
            cache,
        }),
    )
}
