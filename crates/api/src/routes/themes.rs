//! Route definitions for admin theme management.
//!
//! - `admin_router()` mounted at `/admin/themes`
//! - `settings_router()` mounted at `/admin/theme-settings`

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{theme_portability, theme_settings, theme_tools, themes};
use crate::state::AppState;

/// Admin theme routes mounted at `/admin/themes`.
///
/// ```text
/// GET    /                -> list_themes
/// POST   /                -> create_theme
/// POST   /validate        -> validate_draft
/// POST   /palette         -> generate
/// POST   /export          -> export_themes
/// POST   /import          -> import_themes
/// GET    /{id}            -> get_theme
/// PUT    /{id}            -> update_theme
/// DELETE /{id}            -> delete_theme
/// POST   /{id}/activate   -> activate_theme
/// POST   /{id}/default    -> set_default_theme
/// GET    /{id}/css        -> theme_css
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(themes::list_themes).post(themes::create_theme))
        .route("/validate", post(theme_tools::validate_draft))
        .route("/palette", post(theme_tools::generate))
        .route("/export", post(theme_portability::export_themes))
        .route("/import", post(theme_portability::import_themes))
        .route(
            "/{id}",
            get(themes::get_theme)
                .put(themes::update_theme)
                .delete(themes::delete_theme),
        )
        .route("/{id}/activate", post(themes::activate_theme))
        .route("/{id}/default", post(themes::set_default_theme))
        .route("/{id}/css", get(themes::theme_css))
}

/// Theme settings routes mounted at `/admin/theme-settings`.
///
/// ```text
/// GET /  -> get_settings
/// PUT /  -> update_settings
/// ```
pub fn settings_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(theme_settings::get_settings).put(theme_settings::update_settings),
    )
}
