pub mod health;
pub mod inspections;

use axum::Router;

use crate::AppState;

/// Composes the full HTTP surface: the inspection CRUD routes at the root
/// plus health probes under `/health`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(inspections::inspection_routes())
        .nest("/health", health::health_routes())
}
