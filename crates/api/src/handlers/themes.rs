//! Handlers for admin theme management.
//!
//! Mutations that can change what is live (editing or deleting the active
//! theme, activation) go through the propagation controller so the style
//! document never drifts from storage.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use vitrine_core::error::CoreError;
use vitrine_core::theming::{render_stylesheet, ThemeDraft};
use vitrine_core::types::DbId;
use vitrine_db::models::theme::{Theme, UpdateTheme};
use vitrine_events::{AppliedStyles, SwitchOutcome, ThemeChange, ThemeEvent};

use crate::error::{AppError, AppResult};
use crate::query::ActiveOnlyParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response for a completed activation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationResponse<'a> {
    pub theme: Theme,
    pub applied: &'a AppliedStyles,
}

/// Response for a delete.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted_id: DbId,
    /// Set when the deleted theme was active and the default took over.
    pub active_theme_id: Option<DbId>,
}

/// Re-apply the active theme after a mutation that may have changed it.
///
/// The mutation already succeeded, so a failure here only logs; the last
/// applied variables stay live.
pub(crate) async fn refresh_live(state: &AppState) {
    if let Err(e) = state.controller.refresh().await {
        tracing::warn!(error = %e, "Live theme refresh failed; keeping last applied styles");
    }
}

fn is_live(state: &AppState, theme_id: DbId) -> bool {
    state.controller.document().snapshot().theme.theme_id == Some(theme_id)
}

/// GET /api/v1/admin/themes
///
/// List themes, optionally only enabled ones.
pub async fn list_themes(
    State(state): State<AppState>,
    Query(params): Query<ActiveOnlyParams>,
) -> AppResult<impl IntoResponse> {
    let themes = state.catalog.list_themes(params.active_only).await?;
    Ok(Json(DataResponse { data: themes }))
}

/// POST /api/v1/admin/themes
///
/// Validate and create a theme.
pub async fn create_theme(
    State(state): State<AppState>,
    Json(input): Json<ThemeDraft>,
) -> AppResult<impl IntoResponse> {
    let theme = state.catalog.create_theme(&input, None).await?;
    state
        .events
        .publish(ThemeEvent::changed(Some(theme.id), ThemeChange::Created));

    Ok((StatusCode::CREATED, Json(DataResponse { data: theme })))
}

/// GET /api/v1/admin/themes/{id}
pub async fn get_theme(
    State(state): State<AppState>,
    Path(theme_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let theme = state.catalog.get_theme(theme_id).await?;
    Ok(Json(DataResponse { data: theme }))
}

/// PUT /api/v1/admin/themes/{id}
///
/// Partially update a theme. Editing the live theme re-applies it.
pub async fn update_theme(
    State(state): State<AppState>,
    Path(theme_id): Path<DbId>,
    Json(input): Json<UpdateTheme>,
) -> AppResult<impl IntoResponse> {
    let theme = state.catalog.update_theme(theme_id, &input).await?;

    if is_live(&state, theme_id) {
        refresh_live(&state).await;
    }
    state
        .events
        .publish(ThemeEvent::changed(Some(theme_id), ThemeChange::Updated));

    Ok(Json(DataResponse { data: theme }))
}

/// DELETE /api/v1/admin/themes/{id}
///
/// Delete a non-system theme. Deleting the active theme hands the active
/// slot to the default theme first.
pub async fn delete_theme(
    State(state): State<AppState>,
    Path(theme_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let reassigned = state.catalog.delete_theme(theme_id).await?;

    if reassigned.is_some() || is_live(&state, theme_id) {
        refresh_live(&state).await;
    }
    state
        .events
        .publish(ThemeEvent::changed(Some(theme_id), ThemeChange::Deleted));

    Ok(Json(DataResponse {
        data: DeleteResponse {
            deleted_id: theme_id,
            active_theme_id: reassigned,
        },
    }))
}

/// POST /api/v1/admin/themes/{id}/activate
///
/// Switch the live theme. Responds once the new variables are applied.
/// A switch overtaken by a newer one after storing its pointer still
/// succeeded; it responds with the styles that are live now.
pub async fn activate_theme(
    State(state): State<AppState>,
    Path(theme_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let (theme, applied) = match state.controller.switch_to(theme_id).await? {
        SwitchOutcome::Applied {
            styles,
            theme: Some(theme),
        } => (theme, styles),
        SwitchOutcome::Superseded {
            stored: Some(theme),
        } => (theme, state.controller.document().snapshot()),
        SwitchOutcome::Applied { theme: None, .. } | SwitchOutcome::Superseded { stored: None } => {
            return Err(AppError::Core(CoreError::Conflict(
                "Theme switch was superseded by a newer request".to_string(),
            )));
        }
    };

    Ok(Json(DataResponse {
        data: ActivationResponse {
            theme,
            applied: &applied,
        },
    })
    .into_response())
}

/// POST /api/v1/admin/themes/{id}/default
///
/// Make a theme the only default.
pub async fn set_default_theme(
    State(state): State<AppState>,
    Path(theme_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let theme = state.catalog.set_default_theme(theme_id).await?;
    state.events.publish(ThemeEvent::changed(
        Some(theme_id),
        ThemeChange::DefaultChanged,
    ));

    Ok(Json(DataResponse { data: theme }))
}

/// GET /api/v1/admin/themes/{id}/css
///
/// Stylesheet preview of a stored theme, resolved against defaults.
pub async fn theme_css(
    State(state): State<AppState>,
    Path(theme_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let theme = state.catalog.get_theme(theme_id).await?;
    let css = render_stylesheet(&theme.resolve());

    Ok((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        css,
    ))
}
