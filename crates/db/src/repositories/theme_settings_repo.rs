//! Repository for the `theme_settings` table.

use sqlx::PgPool;
use vitrine_core::types::DbId;

use crate::models::theme_settings::{ThemeSettings, ThemeSettingsChanges};

const COLUMNS: &str = "\
    id, active_theme_id, allow_user_themes, enable_dark_mode, created_at, updated_at";

/// Provides access to the theme settings singleton.
pub struct ThemeSettingsRepo;

impl ThemeSettingsRepo {
    /// The authoritative settings row (lowest id), if one exists yet.
    pub async fn get(pool: &PgPool) -> Result<Option<ThemeSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM theme_settings ORDER BY id LIMIT 1");
        sqlx::query_as::<_, ThemeSettings>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Insert a settings row pointing at `active_theme_id`.
    pub async fn create(
        pool: &PgPool,
        active_theme_id: Option<DbId>,
    ) -> Result<ThemeSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO theme_settings (active_theme_id) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ThemeSettings>(&query)
            .bind(active_theme_id)
            .fetch_one(pool)
            .await
    }

    /// Partially update the settings row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &ThemeSettingsChanges,
    ) -> Result<Option<ThemeSettings>, sqlx::Error> {
        let query = format!(
            "UPDATE theme_settings SET \
                 active_theme_id = COALESCE($2, active_theme_id), \
                 allow_user_themes = COALESCE($3, allow_user_themes), \
                 enable_dark_mode = COALESCE($4, enable_dark_mode), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ThemeSettings>(&query)
            .bind(id)
            .bind(changes.active_theme_id)
            .bind(changes.allow_user_themes)
            .bind(changes.enable_dark_mode)
            .fetch_optional(pool)
            .await
    }
}
