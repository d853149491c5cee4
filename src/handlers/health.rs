use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use std::time::Instant;

use crate::AppState;

/// Basic liveness probe - just checks if the service is running
async fn liveness_check() -> impl IntoResponse {
    Json(json!({
        "status": "up",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Readiness probe - verifies the storage backend answers before traffic is
/// routed here. The database backend is pinged through its connection pool;
/// the file backend has no connection to check, so one full read (cheap at
/// this scale) stands in.
async fn readiness_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl IntoResponse {
    let start = Instant::now();
    let probe = match &state.db {
        Some(db) => crate::db::check_connection(db).await,
        None => state.store.list_all().await.map(|_| ()),
    };
    let latency_ms = start.elapsed().as_millis() as u64;

    match probe {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "checks": {
                    "storage": {
                        "status": "up",
                        "backend": state.config.storage_backend,
                        "latency_ms": latency_ms
                    }
                }
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "checks": {
                    "storage": {
                        "status": "down",
                        "backend": state.config.storage_backend,
                        "error": e.response_message(),
                        "latency_ms": latency_ms
                    }
                }
            })),
        ),
    }
}

/// Creates the router for health check endpoints
///
/// Endpoints:
/// - GET /health        - Liveness probe (200 whenever the server runs)
/// - GET /health/ready  - Readiness probe (checks the record store)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(liveness_check))
        .route("/ready", get(readiness_check))
}
