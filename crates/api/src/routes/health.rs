use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use vitrine_db::ThemeStore;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the theme store is reachable.
    pub db_healthy: bool,
    /// Whether a stored theme has been applied since startup.
    pub theme_applied: bool,
}

/// GET /health -- service health, theme store reachability and whether the
/// live theme is still the pre-paint placeholder.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = state.catalog.store().ping().await.is_ok();
    let theme_applied = !state.controller.document().snapshot().placeholder;

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        theme_applied,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
