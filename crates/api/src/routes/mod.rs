pub mod health;
pub mod live_theme;
pub mod themes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /theme                                   live theme + variables (GET)
/// /theme/variables                         live variable map (GET)
/// /theme/events                            theme events (SSE)
///
/// /admin/themes                            list, create
/// /admin/themes/validate                   validate a draft (POST)
/// /admin/themes/palette                    generate a palette (POST)
/// /admin/themes/export                     export document (POST)
/// /admin/themes/import                     import document (POST)
/// /admin/themes/{id}                       get, update, delete
/// /admin/themes/{id}/activate              switch the live theme (POST)
/// /admin/themes/{id}/default               make default (POST)
/// /admin/themes/{id}/css                   stylesheet preview (GET)
///
/// /admin/theme-settings                    get, update
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/theme", live_theme::router())
        .nest("/admin/themes", themes::admin_router())
        .nest("/admin/theme-settings", themes::settings_router())
}
