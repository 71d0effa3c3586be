//! Persistence seam for themes.
//!
//! [`ThemeStore`] exposes the primitive operations the catalog builds on.
//! [`PgThemeStore`] delegates to the repositories; the in-memory store in
//! [`crate::memory`] backs tests and database-less local runs.

use async_trait::async_trait;
use vitrine_core::types::DbId;

use crate::models::theme::{NewTheme, Theme, ThemeChanges};
use crate::models::theme_settings::{ThemeSettings, ThemeSettingsChanges};
use crate::repositories::{ThemeRepo, ThemeSettingsRepo};
use crate::DbPool;

#[async_trait]
pub trait ThemeStore: Send + Sync {
    /// Cheap connectivity check.
    async fn ping(&self) -> Result<(), sqlx::Error>;

    async fn list_themes(&self, active_only: bool) -> Result<Vec<Theme>, sqlx::Error>;
    async fn find_by_id(&self, id: DbId) -> Result<Option<Theme>, sqlx::Error>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Theme>, sqlx::Error>;
    async fn find_default(&self) -> Result<Option<Theme>, sqlx::Error>;
    async fn insert(&self, theme: &NewTheme) -> Result<Theme, sqlx::Error>;
    async fn update(&self, id: DbId, changes: &ThemeChanges)
        -> Result<Option<Theme>, sqlx::Error>;

    /// Overwrite every document column of `id` with `theme`'s values,
    /// NULLs included. The default and system flags and the creation
    /// columns are left as they are.
    async fn replace(&self, id: DbId, theme: &NewTheme) -> Result<Option<Theme>, sqlx::Error>;
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Atomically make `id` the only default theme. `None` if it does not
    /// exist, in which case nothing changes.
    async fn set_default_exclusive(&self, id: DbId) -> Result<Option<Theme>, sqlx::Error>;

    async fn get_settings(&self) -> Result<Option<ThemeSettings>, sqlx::Error>;
    async fn create_settings(
        &self,
        active_theme_id: Option<DbId>,
    ) -> Result<ThemeSettings, sqlx::Error>;
    async fn update_settings(
        &self,
        id: DbId,
        changes: &ThemeSettingsChanges,
    ) -> Result<Option<ThemeSettings>, sqlx::Error>;
}

/// Postgres-backed store.
#[derive(Clone)]
pub struct PgThemeStore {
    pool: DbPool,
}

impl PgThemeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl ThemeStore for PgThemeStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }

    async fn list_themes(&self, active_only: bool) -> Result<Vec<Theme>, sqlx::Error> {
        ThemeRepo::list(&self.pool, active_only).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Theme>, sqlx::Error> {
        ThemeRepo::find_by_id(&self.pool, id).await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Theme>, sqlx::Error> {
        ThemeRepo::find_by_slug(&self.pool, slug).await
    }

    async fn find_default(&self) -> Result<Option<Theme>, sqlx::Error> {
        ThemeRepo::find_default(&self.pool).await
    }

    async fn insert(&self, theme: &NewTheme) -> Result<Theme, sqlx::Error> {
        ThemeRepo::create(&self.pool, theme).await
    }

    async fn update(
        &self,
        id: DbId,
        changes: &ThemeChanges,
    ) -> Result<Option<Theme>, sqlx::Error> {
        ThemeRepo::update(&self.pool, id, changes).await
    }

    async fn replace(&self, id: DbId, theme: &NewTheme) -> Result<Option<Theme>, sqlx::Error> {
        ThemeRepo::replace(&self.pool, id, theme).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        ThemeRepo::delete(&self.pool, id).await
    }

    async fn set_default_exclusive(&self, id: DbId) -> Result<Option<Theme>, sqlx::Error> {
        ThemeRepo::set_default_exclusive(&self.pool, id).await
    }

    async fn get_settings(&self) -> Result<Option<ThemeSettings>, sqlx::Error> {
        ThemeSettingsRepo::get(&self.pool).await
    }

    async fn create_settings(
        &self,
        active_theme_id: Option<DbId>,
    ) -> Result<ThemeSettings, sqlx::Error> {
        ThemeSettingsRepo::create(&self.pool, active_theme_id).await
    }

    async fn update_settings(
        &self,
        id: DbId,
        changes: &ThemeSettingsChanges,
    ) -> Result<Option<ThemeSettings>, sqlx::Error> {
        ThemeSettingsRepo::update(&self.pool, id, changes).await
    }
}
