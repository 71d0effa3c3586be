//! Route definitions for the live theme read side.

use axum::routing::get;
use axum::Router;

use crate::handlers::live_theme;
use crate::state::AppState;

/// Live theme routes mounted at `/theme`.
///
/// ```text
/// GET /           -> get_live_theme
/// GET /variables  -> get_variables
/// GET /events     -> theme_events (SSE)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(live_theme::get_live_theme))
        .route("/variables", get(live_theme::get_variables))
        .route("/events", get(live_theme::theme_events))
}

/// Root-level stylesheet route (NOT under `/api/v1`), so pages can link it
/// directly.
pub fn stylesheet_router() -> Router<AppState> {
    Router::new().route("/theme.css", get(live_theme::get_stylesheet))
}
