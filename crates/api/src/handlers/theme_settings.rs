//! Handlers for the singleton theme settings record.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use vitrine_db::models::theme_settings::UpdateThemeSettings;
use vitrine_events::{ThemeChange, ThemeEvent};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/theme-settings
pub async fn get_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = state.catalog.get_settings().await?;
    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/v1/admin/theme-settings
///
/// Updates the feature flags only. The active theme changes through
/// activation, never through this endpoint.
pub async fn update_settings(
    State(state): State<AppState>,
    Json(input): Json<UpdateThemeSettings>,
) -> AppResult<impl IntoResponse> {
    let settings = state.catalog.update_settings(&input).await?;
    state
        .events
        .publish(ThemeEvent::changed(None, ThemeChange::SettingsUpdated));

    Ok(Json(DataResponse { data: settings }))
}
