//! Theme export and import.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use vitrine_core::theming::portability::{ImportOptions, ThemeExportDocument};
use vitrine_core::types::DbId;
use vitrine_events::{ThemeChange, ThemeEvent};

use crate::error::AppResult;
use crate::handlers::themes::refresh_live;
use crate::response::DataResponse;
use crate::state::AppState;

const DEFAULT_EXPORTER: &str = "admin";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    /// Restrict the export to these themes; all themes when absent.
    pub theme_ids: Option<Vec<DbId>>,
    pub exported_by: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub document: ThemeExportDocument,
    #[serde(flatten)]
    pub options: ImportOptions,
}

/// POST /api/v1/admin/themes/export
pub async fn export_themes(
    State(state): State<AppState>,
    Json(input): Json<ExportRequest>,
) -> AppResult<impl IntoResponse> {
    let exported_by = input.exported_by.as_deref().unwrap_or(DEFAULT_EXPORTER);
    let document = state
        .catalog
        .export_themes(input.theme_ids.as_deref(), exported_by)
        .await?;

    Ok(Json(DataResponse { data: document }))
}

/// POST /api/v1/admin/themes/import
///
/// Returns the import report. Overwriting the live theme re-applies it.
pub async fn import_themes(
    State(state): State<AppState>,
    Json(input): Json<ImportRequest>,
) -> AppResult<impl IntoResponse> {
    let report = state
        .catalog
        .import_themes(&input.document, input.options, None)
        .await?;

    if !report.updated.is_empty() {
        refresh_live(&state).await;
    }
    if !report.imported.is_empty() || !report.updated.is_empty() {
        state
            .events
            .publish(ThemeEvent::changed(None, ThemeChange::Imported));
    }

    Ok(Json(DataResponse { data: report }))
}
