//! Process-wide theme settings.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrine_core::types::{DbId, Timestamp};

/// A row from the `theme_settings` table.
///
/// Logically a singleton; when several rows exist the lowest id wins.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    pub id: DbId,
    /// Weak reference to the theme currently selected for rendering.
    pub active_theme_id: Option<DbId>,
    pub allow_user_themes: bool,
    pub enable_dark_mode: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Column-level changes for the settings row. `None` leaves a column as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeSettingsChanges {
    pub active_theme_id: Option<DbId>,
    pub allow_user_themes: Option<bool>,
    pub enable_dark_mode: Option<bool>,
}

/// Admin-editable flags. The active theme is changed through activation,
/// not through this payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateThemeSettings {
    pub allow_user_themes: Option<bool>,
    pub enable_dark_mode: Option<bool>,
}

impl From<&UpdateThemeSettings> for ThemeSettingsChanges {
    fn from(dto: &UpdateThemeSettings) -> Self {
        Self {
            active_theme_id: None,
            allow_user_themes: dto.allow_user_themes,
            enable_dark_mode: dto.enable_dark_mode,
        }
    }
}
