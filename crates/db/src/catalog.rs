//! Theme lifecycle rules over a [`ThemeStore`].
//!
//! The store only knows rows; the catalog owns the invariants:
//!
//! - slugs are unique and documents are validated before they are stored;
//! - at most one theme is the default, and granting the flag clears the
//!   previous holder atomically;
//! - system themes are never deleted or disabled;
//! - the active pointer is moved to the default theme before the active
//!   theme is deleted;
//! - only enabled themes can be activated.

use std::collections::HashSet;
use std::sync::Arc;

use vitrine_core::error::CoreError;
use vitrine_core::theming::defaults::{default_theme_draft, DEFAULT_THEME_SLUG};
use vitrine_core::theming::portability::{
    parse_import_record, ImportOptions, ImportReport, ThemeExportDocument,
};
use vitrine_core::theming::schema::ThemeDraft;
use vitrine_core::theming::validation::validate_for_storage;
use vitrine_core::theming::ResolvedTheme;
use vitrine_core::types::DbId;

use crate::error::ThemeError;
use crate::models::theme::{NewTheme, Theme, UpdateTheme};
use crate::models::theme_settings::{ThemeSettings, ThemeSettingsChanges, UpdateThemeSettings};
use crate::store::ThemeStore;

/// The active theme together with the settings that point at it.
#[derive(Debug, Clone)]
pub struct ActiveTheme {
    /// `None` when no theme has ever been activated or the pointer dangles.
    pub theme: Option<Theme>,
    pub settings: ThemeSettings,
}

impl ActiveTheme {
    /// Resolve the active theme, or the defaults when there is none.
    pub fn resolve(&self) -> ResolvedTheme {
        self.theme
            .as_ref()
            .map(Theme::resolve)
            .unwrap_or_else(ResolvedTheme::defaults)
    }
}

enum ImportStep {
    Insert(ThemeDraft),
    Overwrite(DbId, ThemeDraft),
}

#[derive(Clone)]
pub struct ThemeCatalog {
    store: Arc<dyn ThemeStore>,
}

impl ThemeCatalog {
    pub fn new(store: Arc<dyn ThemeStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn ThemeStore> {
        &self.store
    }

    // -----------------------------------------------------------------------
    // Settings and activation
    // -----------------------------------------------------------------------

    /// Fetch the settings singleton, creating it on first read with the
    /// default theme (if any) as the active one.
    async fn ensure_settings(&self) -> Result<ThemeSettings, ThemeError> {
        if let Some(settings) = self.store.get_settings().await? {
            return Ok(settings);
        }

        let default_id = self.store.find_default().await?.map(|t| t.id);
        let settings = self.store.create_settings(default_id).await?;
        tracing::info!(
            settings_id = settings.id,
            active_theme_id = ?default_id,
            "Created theme settings"
        );
        Ok(settings)
    }

    /// The active theme and the current settings.
    ///
    /// A missing active theme is not an error; callers resolve the
    /// defaults instead.
    pub async fn get_active_theme(&self) -> Result<ActiveTheme, ThemeError> {
        let settings = self.ensure_settings().await?;
        let theme = match settings.active_theme_id {
            Some(id) => self.store.find_by_id(id).await?,
            None => None,
        };
        Ok(ActiveTheme { theme, settings })
    }

    /// Point the settings at theme `id`.
    pub async fn set_active_theme(&self, id: DbId) -> Result<Theme, ThemeError> {
        let theme = self.get_theme(id).await?;
        if !theme.is_active {
            return Err(CoreError::Validation(format!(
                "Theme '{}' is disabled and cannot be activated",
                theme.slug
            ))
            .into());
        }

        let settings = self.ensure_settings().await?;
        let changes = ThemeSettingsChanges {
            active_theme_id: Some(id),
            ..Default::default()
        };
        self.store
            .update_settings(settings.id, &changes)
            .await?
            .ok_or_else(|| CoreError::Internal("Theme settings vanished during update".into()))?;

        tracing::info!(theme_id = id, slug = %theme.slug, "Theme activated");
        Ok(theme)
    }

    pub async fn get_settings(&self) -> Result<ThemeSettings, ThemeError> {
        self.ensure_settings().await
    }

    pub async fn update_settings(
        &self,
        input: &UpdateThemeSettings,
    ) -> Result<ThemeSettings, ThemeError> {
        let settings = self.ensure_settings().await?;
        let updated = self
            .store
            .update_settings(settings.id, &ThemeSettingsChanges::from(input))
            .await?
            .ok_or_else(|| CoreError::Internal("Theme settings vanished during update".into()))?;

        tracing::info!(
            allow_user_themes = updated.allow_user_themes,
            enable_dark_mode = updated.enable_dark_mode,
            "Theme settings updated"
        );
        Ok(updated)
    }

    // -----------------------------------------------------------------------
    // CRUD
    // -----------------------------------------------------------------------

    pub async fn list_themes(&self, active_only: bool) -> Result<Vec<Theme>, ThemeError> {
        Ok(self.store.list_themes(active_only).await?)
    }

    pub async fn get_theme(&self, id: DbId) -> Result<Theme, ThemeError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ThemeError::not_found(id))
    }

    /// Validate and store a new theme.
    pub async fn create_theme(
        &self,
        draft: &ThemeDraft,
        created_by: Option<DbId>,
    ) -> Result<Theme, ThemeError> {
        let errors = validate_for_storage(draft);
        if !errors.is_empty() {
            return Err(CoreError::InvalidTheme(errors).into());
        }

        let new = NewTheme::from_draft(draft, created_by);
        self.ensure_slug_free(&new.slug, None).await?;

        let mut theme = self.store.insert(&new).await?;
        if draft.is_default == Some(true) {
            theme = self.make_default(theme.id).await?;
        }

        tracing::info!(theme_id = theme.id, slug = %theme.slug, "Theme created");
        Ok(theme)
    }

    /// Apply an admin patch to theme `id`.
    pub async fn update_theme(&self, id: DbId, patch: &UpdateTheme) -> Result<Theme, ThemeError> {
        let existing = self.get_theme(id).await?;

        if patch.is_active == Some(false) {
            if let Some(reason) = self.disable_blocker(&existing).await? {
                return Err(CoreError::Validation(reason).into());
            }
        }

        let errors = validate_for_storage(&patch.apply_to(existing.to_draft()));
        if !errors.is_empty() {
            return Err(CoreError::InvalidTheme(errors).into());
        }

        if let Some(slug) = patch.slug.as_deref().filter(|s| *s != existing.slug) {
            self.ensure_slug_free(slug, Some(id)).await?;
        }

        let mut theme = self
            .store
            .update(id, &patch.to_changes())
            .await?
            .ok_or_else(|| ThemeError::not_found(id))?;
        if patch.is_default == Some(true) && !theme.is_default {
            theme = self.make_default(id).await?;
        }

        tracing::info!(theme_id = id, slug = %theme.slug, "Theme updated");
        Ok(theme)
    }

    /// Delete theme `id`.
    ///
    /// System themes are rejected before anything is touched. Deleting the
    /// active theme first moves the active pointer to the default theme;
    /// returns that theme's id when a reassignment happened.
    pub async fn delete_theme(&self, id: DbId) -> Result<Option<DbId>, ThemeError> {
        let theme = self.get_theme(id).await?;
        if theme.is_system {
            return Err(CoreError::Conflict(format!(
                "System theme '{}' cannot be deleted",
                theme.slug
            ))
            .into());
        }

        let mut reassigned_to = None;
        if let Some(settings) = self.store.get_settings().await? {
            if settings.active_theme_id == Some(id) {
                let fallback = self
                    .store
                    .find_default()
                    .await?
                    .filter(|t| t.id != id)
                    .ok_or_else(|| {
                        CoreError::Conflict(format!(
                            "Theme '{}' is active and there is no other default theme to fall back to",
                            theme.slug
                        ))
                    })?;

                let changes = ThemeSettingsChanges {
                    active_theme_id: Some(fallback.id),
                    ..Default::default()
                };
                self.store.update_settings(settings.id, &changes).await?;
                tracing::info!(
                    from_theme_id = id,
                    to_theme_id = fallback.id,
                    "Active theme reassigned before delete"
                );
                reassigned_to = Some(fallback.id);
            }
        }

        if !self.store.delete(id).await? {
            return Err(ThemeError::not_found(id));
        }

        tracing::info!(theme_id = id, slug = %theme.slug, "Theme deleted");
        Ok(reassigned_to)
    }

    /// Make theme `id` the only default theme.
    pub async fn set_default_theme(&self, id: DbId) -> Result<Theme, ThemeError> {
        let theme = self.make_default(id).await?;
        tracing::info!(theme_id = id, slug = %theme.slug, "Default theme changed");
        Ok(theme)
    }

    async fn make_default(&self, id: DbId) -> Result<Theme, ThemeError> {
        self.store
            .set_default_exclusive(id)
            .await?
            .ok_or_else(|| ThemeError::not_found(id))
    }

    /// Why theme `theme` cannot be disabled, if it cannot. System themes and
    /// the theme the active pointer names stay enabled.
    async fn disable_blocker(&self, theme: &Theme) -> Result<Option<String>, ThemeError> {
        if theme.is_system {
            return Ok(Some(format!(
                "System theme '{}' cannot be disabled",
                theme.slug
            )));
        }
        let settings = self.store.get_settings().await?;
        if settings.is_some_and(|s| s.active_theme_id == Some(theme.id)) {
            return Ok(Some(format!(
                "Theme '{}' is active and cannot be disabled",
                theme.slug
            )));
        }
        Ok(None)
    }

    async fn ensure_slug_free(&self, slug: &str, except: Option<DbId>) -> Result<(), ThemeError> {
        match self.store.find_by_slug(slug).await? {
            Some(other) if Some(other.id) != except => Err(CoreError::Conflict(format!(
                "Theme slug '{slug}' already exists"
            ))
            .into()),
            _ => Ok(()),
        }
    }

    // -----------------------------------------------------------------------
    // Import / export
    // -----------------------------------------------------------------------

    /// Export the given themes (all themes when `ids` is `None`).
    pub async fn export_themes(
        &self,
        ids: Option<&[DbId]>,
        exported_by: &str,
    ) -> Result<ThemeExportDocument, ThemeError> {
        let themes = self.store.list_themes(false).await?;
        let drafts: Vec<ThemeDraft> = themes
            .iter()
            .filter(|t| ids.map_or(true, |ids| ids.contains(&t.id)))
            .map(Theme::to_draft)
            .collect();

        tracing::info!(count = drafts.len(), exported_by, "Themes exported");
        Ok(ThemeExportDocument::new(
            &drafts,
            exported_by,
            chrono::Utc::now(),
        ))
    }

    /// Import themes from an export document.
    ///
    /// Records are planned first and written second, so with
    /// `skip_invalid = false` the first invalid or conflicting record
    /// aborts before anything is stored. Imported themes never take the
    /// default flag.
    pub async fn import_themes(
        &self,
        document: &ThemeExportDocument,
        options: ImportOptions,
        imported_by: Option<DbId>,
    ) -> Result<ImportReport, ThemeError> {
        let mut report = ImportReport::default();
        let mut plan = Vec::with_capacity(document.themes.len());
        let mut seen = HashSet::new();

        for (index, raw) in document.themes.iter().enumerate() {
            let rejection = match parse_import_record(index, raw) {
                Err(message) => Some(CoreError::Validation(message)),
                Ok(draft) => {
                    let slug = draft.slug.clone().unwrap_or_default();
                    if !seen.insert(slug.clone()) {
                        Some(CoreError::Conflict(format!(
                            "Theme #{} ('{slug}'): duplicate slug within the import",
                            index + 1
                        )))
                    } else {
                        match self.store.find_by_slug(&slug).await? {
                            Some(existing) if options.overwrite_existing => {
                                let blocker = match draft.is_active {
                                    Some(false) => self.disable_blocker(&existing).await?,
                                    _ => None,
                                };
                                match blocker {
                                    Some(reason) => Some(CoreError::Validation(format!(
                                        "Theme #{}: {reason}",
                                        index + 1
                                    ))),
                                    None => {
                                        plan.push(ImportStep::Overwrite(existing.id, draft));
                                        None
                                    }
                                }
                            }
                            Some(_) => Some(CoreError::Conflict(format!(
                                "Theme #{} ('{slug}'): slug already exists",
                                index + 1
                            ))),
                            None => {
                                plan.push(ImportStep::Insert(draft));
                                None
                            }
                        }
                    }
                }
            };

            if let Some(err) = rejection {
                if !options.skip_invalid {
                    tracing::warn!(error = %err, "Theme import aborted");
                    return Err(err.into());
                }
                let message = match err {
                    CoreError::Validation(m) | CoreError::Conflict(m) => m,
                    other => other.to_string(),
                };
                report.record_skip(message);
            }
        }

        for step in plan {
            match step {
                ImportStep::Insert(draft) => {
                    let theme = self
                        .store
                        .insert(&NewTheme::from_draft(&draft, imported_by))
                        .await?;
                    report.imported.push(theme.slug);
                }
                ImportStep::Overwrite(id, draft) => {
                    let theme = self
                        .store
                        .replace(id, &NewTheme::from_draft(&draft, None))
                        .await?
                        .ok_or_else(|| ThemeError::not_found(id))?;
                    report.updated.push(theme.slug);
                }
            }
        }

        tracing::info!(
            imported = report.imported.len(),
            updated = report.updated.len(),
            skipped = report.skipped,
            "Theme import finished"
        );
        Ok(report)
    }

    // -----------------------------------------------------------------------
    // Seeding
    // -----------------------------------------------------------------------

    /// Ensure the built-in default theme exists, is the default, and that
    /// the settings row points somewhere. Idempotent.
    pub async fn seed_defaults(&self) -> Result<Theme, ThemeError> {
        let theme = match self.store.find_by_slug(DEFAULT_THEME_SLUG).await? {
            Some(existing) => existing,
            None => {
                let new = NewTheme {
                    is_system: true,
                    ..NewTheme::from_draft(&default_theme_draft(), None)
                };
                let inserted = self.store.insert(&new).await?;
                tracing::info!(theme_id = inserted.id, "Seeded default theme");
                inserted
            }
        };

        let theme = match self.store.find_default().await? {
            Some(_) => theme,
            None => self.make_default(theme.id).await?,
        };

        let settings = self.ensure_settings().await?;
        if settings.active_theme_id.is_none() {
            let changes = ThemeSettingsChanges {
                active_theme_id: Some(theme.id),
                ..Default::default()
            };
            self.store.update_settings(settings.id, &changes).await?;
        }

        Ok(theme)
    }
}
