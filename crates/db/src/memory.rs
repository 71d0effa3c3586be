//! In-memory [`ThemeStore`].
//!
//! Mirrors the table constraints that matter to the catalog: unique slugs,
//! a single default, and "lowest id wins" for settings. Can be switched
//! offline to simulate a database outage.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use vitrine_core::types::DbId;

use crate::models::theme::{NewTheme, Theme, ThemeChanges};
use crate::models::theme_settings::{ThemeSettings, ThemeSettingsChanges};
use crate::store::ThemeStore;

#[derive(Default)]
struct MemoryState {
    themes: BTreeMap<DbId, Theme>,
    settings: BTreeMap<DbId, ThemeSettings>,
    next_id: DbId,
}

impl MemoryState {
    fn allocate_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct MemoryThemeStore {
    state: RwLock<MemoryState>,
    offline: AtomicBool,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// While offline every operation fails with [`sqlx::Error::PoolTimedOut`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), sqlx::Error> {
        if self.offline.load(Ordering::SeqCst) {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }
}

fn unique_violation(constraint: &str) -> sqlx::Error {
    sqlx::Error::Protocol(format!(
        "duplicate key value violates unique constraint \"{constraint}\""
    ))
}

fn now() -> vitrine_core::types::Timestamp {
    chrono::Utc::now()
}

#[async_trait]
impl ThemeStore for MemoryThemeStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.check_online()
    }

    async fn list_themes(&self, active_only: bool) -> Result<Vec<Theme>, sqlx::Error> {
        self.check_online()?;
        let state = self.state.read().await;
        let mut themes: Vec<Theme> = state
            .themes
            .values()
            .filter(|t| !active_only || t.is_active)
            .cloned()
            .collect();
        themes.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(themes)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Theme>, sqlx::Error> {
        self.check_online()?;
        Ok(self.state.read().await.themes.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Theme>, sqlx::Error> {
        self.check_online()?;
        let state = self.state.read().await;
        Ok(state.themes.values().find(|t| t.slug == slug).cloned())
    }

    async fn find_default(&self) -> Result<Option<Theme>, sqlx::Error> {
        self.check_online()?;
        let state = self.state.read().await;
        Ok(state.themes.values().find(|t| t.is_default).cloned())
    }

    async fn insert(&self, input: &NewTheme) -> Result<Theme, sqlx::Error> {
        self.check_online()?;
        let mut state = self.state.write().await;
        if state.themes.values().any(|t| t.slug == input.slug) {
            return Err(unique_violation("uq_themes_slug"));
        }
        if input.is_default && state.themes.values().any(|t| t.is_default) {
            return Err(unique_violation("uq_themes_single_default"));
        }

        let id = state.allocate_id();
        let stamp = now();
        let theme = Theme {
            id,
            name: input.name.clone(),
            slug: input.slug.clone(),
            description: input.description.clone(),
            is_active: input.is_active,
            is_default: input.is_default,
            is_system: input.is_system,
            color_scheme: input.color_scheme.clone(),
            typography: input.typography.clone(),
            spacing: input.spacing.clone(),
            borders: input.borders.clone(),
            version: input.version.clone(),
            tags: input.tags.clone(),
            preview: input.preview.clone(),
            created_by: input.created_by,
            created_at: stamp,
            updated_at: stamp,
        };
        state.themes.insert(id, theme.clone());
        Ok(theme)
    }

    async fn update(
        &self,
        id: DbId,
        changes: &ThemeChanges,
    ) -> Result<Option<Theme>, sqlx::Error> {
        self.check_online()?;
        let mut state = self.state.write().await;

        if let Some(slug) = &changes.slug {
            if state.themes.values().any(|t| t.id != id && &t.slug == slug) {
                return Err(unique_violation("uq_themes_slug"));
            }
        }
        if changes.is_default == Some(true)
            && state.themes.values().any(|t| t.id != id && t.is_default)
        {
            return Err(unique_violation("uq_themes_single_default"));
        }

        let Some(theme) = state.themes.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(v) = &changes.name {
            theme.name = v.clone();
        }
        if let Some(v) = &changes.slug {
            theme.slug = v.clone();
        }
        if let Some(v) = &changes.description {
            theme.description = Some(v.clone());
        }
        if let Some(v) = changes.is_active {
            theme.is_active = v;
        }
        if let Some(v) = changes.is_default {
            theme.is_default = v;
        }
        if let Some(v) = &changes.color_scheme {
            theme.color_scheme = v.clone();
        }
        if let Some(v) = &changes.typography {
            theme.typography = Some(v.clone());
        }
        if let Some(v) = &changes.spacing {
            theme.spacing = Some(v.clone());
        }
        if let Some(v) = &changes.borders {
            theme.borders = Some(v.clone());
        }
        if let Some(v) = &changes.version {
            theme.version = v.clone();
        }
        if let Some(v) = &changes.tags {
            theme.tags = v.clone();
        }
        if let Some(v) = &changes.preview {
            theme.preview = Some(v.clone());
        }
        theme.updated_at = now();

        Ok(Some(theme.clone()))
    }

    async fn replace(&self, id: DbId, input: &NewTheme) -> Result<Option<Theme>, sqlx::Error> {
        self.check_online()?;
        let mut state = self.state.write().await;
        if state.themes.values().any(|t| t.id != id && t.slug == input.slug) {
            return Err(unique_violation("uq_themes_slug"));
        }

        let Some(theme) = state.themes.get_mut(&id) else {
            return Ok(None);
        };
        theme.name = input.name.clone();
        theme.slug = input.slug.clone();
        theme.description = input.description.clone();
        theme.is_active = input.is_active;
        theme.color_scheme = input.color_scheme.clone();
        theme.typography = input.typography.clone();
        theme.spacing = input.spacing.clone();
        theme.borders = input.borders.clone();
        theme.version = input.version.clone();
        theme.tags = input.tags.clone();
        theme.preview = input.preview.clone();
        theme.updated_at = now();

        Ok(Some(theme.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        self.check_online()?;
        let mut state = self.state.write().await;
        let removed = state.themes.remove(&id).is_some();
        if removed {
            // ON DELETE SET NULL
            for settings in state.settings.values_mut() {
                if settings.active_theme_id == Some(id) {
                    settings.active_theme_id = None;
                }
            }
        }
        Ok(removed)
    }

    async fn set_default_exclusive(&self, id: DbId) -> Result<Option<Theme>, sqlx::Error> {
        self.check_online()?;
        let mut state = self.state.write().await;
        if !state.themes.contains_key(&id) {
            return Ok(None);
        }

        let stamp = now();
        for theme in state.themes.values_mut() {
            let should_be_default = theme.id == id;
            if theme.is_default != should_be_default {
                theme.is_default = should_be_default;
                theme.updated_at = stamp;
            }
        }
        Ok(state.themes.get(&id).cloned())
    }

    async fn get_settings(&self) -> Result<Option<ThemeSettings>, sqlx::Error> {
        self.check_online()?;
        let state = self.state.read().await;
        Ok(state.settings.values().next().cloned())
    }

    async fn create_settings(
        &self,
        active_theme_id: Option<DbId>,
    ) -> Result<ThemeSettings, sqlx::Error> {
        self.check_online()?;
        let mut state = self.state.write().await;
        let id = state.allocate_id();
        let stamp = now();
        let settings = ThemeSettings {
            id,
            active_theme_id,
            allow_user_themes: false,
            enable_dark_mode: false,
            created_at: stamp,
            updated_at: stamp,
        };
        state.settings.insert(id, settings.clone());
        Ok(settings)
    }

    async fn update_settings(
        &self,
        id: DbId,
        changes: &ThemeSettingsChanges,
    ) -> Result<Option<ThemeSettings>, sqlx::Error> {
        self.check_online()?;
        let mut state = self.state.write().await;
        let Some(settings) = state.settings.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(v) = changes.active_theme_id {
            settings.active_theme_id = Some(v);
        }
        if let Some(v) = changes.allow_user_themes {
            settings.allow_user_themes = v;
        }
        if let Some(v) = changes.enable_dark_mode {
            settings.enable_dark_mode = v;
        }
        settings.updated_at = now();

        Ok(Some(settings.clone()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
