//! Stateless theme tooling: draft validation and palette generation.

use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use vitrine_core::theming::schema::ColorScale;
use vitrine_core::theming::validation::validate_for_storage;
use vitrine_core::theming::{generate_palette, ThemeDraft};

use crate::error::AppResult;
use crate::response::DataResponse;

#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct PaletteRequest {
    pub base: String,
}

#[derive(Debug, Serialize)]
pub struct PaletteResponse {
    pub base: String,
    pub palette: ColorScale,
}

/// POST /api/v1/admin/themes/validate
///
/// Check a draft without storing it. Always 200; the verdict is in the body.
pub async fn validate_draft(Json(document): Json<serde_json::Value>) -> impl IntoResponse {
    let errors = match serde_json::from_value::<ThemeDraft>(document) {
        Ok(draft) => validate_for_storage(&draft),
        Err(e) => vec![format!("malformed theme document: {e}")],
    };

    Json(DataResponse {
        data: ValidationReport {
            valid: errors.is_empty(),
            errors,
        },
    })
}

/// POST /api/v1/admin/themes/palette
pub async fn generate(Json(input): Json<PaletteRequest>) -> AppResult<impl IntoResponse> {
    let palette = generate_palette(&input.base)?;
    Ok(Json(DataResponse {
        data: PaletteResponse {
            base: input.base,
            palette,
        },
    }))
}
