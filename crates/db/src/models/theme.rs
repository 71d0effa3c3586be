//! Theme models and DTOs.
//!
//! Structural blocks are stored as raw JSON. Legacy rows may carry partial
//! or slightly malformed blocks; [`Theme::overrides`] decodes them leniently
//! and resolution backfills whatever is missing.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrine_core::theming::schema::{
    PartialBorders, PartialColorScheme, PartialSpacing, PartialTypography, ThemeDraft,
    ThemeOverrides,
};
use vitrine_core::theming::ResolvedTheme;
use vitrine_core::types::{DbId, Timestamp};

/// Version stamped on themes created without one.
pub const DEFAULT_VERSION: &str = "1.0.0";

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `themes` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub is_default: bool,
    pub is_system: bool,
    pub color_scheme: serde_json::Value,
    pub typography: Option<serde_json::Value>,
    pub spacing: Option<serde_json::Value>,
    pub borders: Option<serde_json::Value>,
    pub version: String,
    pub tags: Vec<String>,
    pub preview: Option<String>,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Theme {
    /// Decode the stored blocks.
    ///
    /// A block that does not match the schema is dropped (and later
    /// resolved from defaults) rather than failing the whole theme.
    pub fn overrides(&self) -> ThemeOverrides {
        ThemeOverrides {
            color_scheme: decode_block::<PartialColorScheme>(
                self.id,
                "colorScheme",
                Some(&self.color_scheme),
            ),
            typography: decode_block::<PartialTypography>(
                self.id,
                "typography",
                self.typography.as_ref(),
            ),
            spacing: decode_block::<PartialSpacing>(self.id, "spacing", self.spacing.as_ref()),
            borders: decode_block::<PartialBorders>(self.id, "borders", self.borders.as_ref()),
        }
    }

    /// Backfill this theme against the defaults.
    pub fn resolve(&self) -> ResolvedTheme {
        ResolvedTheme::new(
            Some(self.id),
            self.name.clone(),
            self.slug.clone(),
            self.version.clone(),
            Some(&self.overrides()),
        )
    }

    /// The theme as a portable document, without storage identity.
    pub fn to_draft(&self) -> ThemeDraft {
        ThemeDraft {
            name: Some(self.name.clone()),
            slug: Some(self.slug.clone()),
            description: self.description.clone(),
            version: Some(self.version.clone()),
            tags: self.tags.clone(),
            preview: self.preview.clone(),
            is_active: Some(self.is_active),
            is_default: Some(self.is_default),
            overrides: self.overrides(),
        }
    }
}

fn decode_block<T: DeserializeOwned>(
    theme_id: DbId,
    block: &'static str,
    value: Option<&serde_json::Value>,
) -> Option<T> {
    let value = value.filter(|v| !v.is_null())?;
    match serde_json::from_value(value.clone()) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            tracing::warn!(theme_id, block, error = %e, "Ignoring malformed theme block");
            None
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Option<serde_json::Value> {
    serde_json::to_value(value).ok()
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Insert payload for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTheme {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub is_default: bool,
    pub is_system: bool,
    pub color_scheme: serde_json::Value,
    pub typography: Option<serde_json::Value>,
    pub spacing: Option<serde_json::Value>,
    pub borders: Option<serde_json::Value>,
    pub version: String,
    pub tags: Vec<String>,
    pub preview: Option<String>,
    pub created_by: Option<DbId>,
}

impl NewTheme {
    /// Build an insert payload from an already validated draft.
    ///
    /// `is_default` is always `false` here; the default flag is only ever
    /// granted through the exclusive set-default operation.
    pub fn from_draft(draft: &ThemeDraft, created_by: Option<DbId>) -> Self {
        let blocks = &draft.overrides;
        Self {
            name: draft.name.clone().unwrap_or_default(),
            slug: draft.slug.clone().unwrap_or_default(),
            description: draft.description.clone(),
            is_active: draft.is_active.unwrap_or(true),
            is_default: false,
            is_system: false,
            color_scheme: blocks
                .color_scheme
                .as_ref()
                .and_then(to_json)
                .unwrap_or_else(|| serde_json::json!({})),
            typography: blocks.typography.as_ref().and_then(to_json),
            spacing: blocks.spacing.as_ref().and_then(to_json),
            borders: blocks.borders.as_ref().and_then(to_json),
            version: draft
                .version
                .clone()
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            tags: draft.tags.clone(),
            preview: draft.preview.clone(),
            created_by,
        }
    }
}

/// Column-level changes for a theme update. `None` leaves a column as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeChanges {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub is_default: Option<bool>,
    pub color_scheme: Option<serde_json::Value>,
    pub typography: Option<serde_json::Value>,
    pub spacing: Option<serde_json::Value>,
    pub borders: Option<serde_json::Value>,
    pub version: Option<String>,
    pub tags: Option<Vec<String>>,
    pub preview: Option<String>,
}

/// Partial update of a theme as submitted by an admin.
///
/// Structural blocks replace the stored block wholesale; keys the block
/// omits still resolve from defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateTheme {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub is_default: Option<bool>,
    pub color_scheme: Option<PartialColorScheme>,
    pub typography: Option<PartialTypography>,
    pub spacing: Option<PartialSpacing>,
    pub borders: Option<PartialBorders>,
    pub version: Option<String>,
    pub tags: Option<Vec<String>>,
    pub preview: Option<String>,
}

impl UpdateTheme {
    /// Apply the patch to `draft`, producing the document that would be
    /// stored.
    pub fn apply_to(&self, mut draft: ThemeDraft) -> ThemeDraft {
        if let Some(name) = &self.name {
            draft.name = Some(name.clone());
        }
        if let Some(slug) = &self.slug {
            draft.slug = Some(slug.clone());
        }
        if let Some(description) = &self.description {
            draft.description = Some(description.clone());
        }
        if let Some(version) = &self.version {
            draft.version = Some(version.clone());
        }
        if let Some(tags) = &self.tags {
            draft.tags = tags.clone();
        }
        if let Some(preview) = &self.preview {
            draft.preview = Some(preview.clone());
        }
        if self.is_active.is_some() {
            draft.is_active = self.is_active;
        }
        if self.color_scheme.is_some() {
            draft.overrides.color_scheme = self.color_scheme.clone();
        }
        if self.typography.is_some() {
            draft.overrides.typography = self.typography.clone();
        }
        if self.spacing.is_some() {
            draft.overrides.spacing = self.spacing.clone();
        }
        if self.borders.is_some() {
            draft.overrides.borders = self.borders.clone();
        }
        draft
    }

    /// Column changes for this patch. The default flag is excluded; it is
    /// handled by the exclusive set-default operation.
    pub fn to_changes(&self) -> ThemeChanges {
        ThemeChanges {
            name: self.name.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            is_active: self.is_active,
            is_default: self.is_default.filter(|d| !d),
            color_scheme: self.color_scheme.as_ref().and_then(to_json),
            typography: self.typography.as_ref().and_then(to_json),
            spacing: self.spacing.as_ref().and_then(to_json),
            borders: self.borders.as_ref().and_then(to_json),
            version: self.version.clone(),
            tags: self.tags.clone(),
            preview: self.preview.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vitrine_core::theming::default_definition;

    fn row(color_scheme: serde_json::Value, spacing: Option<serde_json::Value>) -> Theme {
        let now = chrono::Utc::now();
        Theme {
            id: 3,
            name: "Legacy".into(),
            slug: "legacy".into(),
            description: None,
            is_active: true,
            is_default: false,
            is_system: false,
            color_scheme,
            typography: None,
            spacing,
            borders: None,
            version: "0.9.0".into(),
            tags: vec![],
            preview: None,
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn malformed_block_resolves_from_defaults() {
        let theme = row(
            json!({ "primary": { "500": "#123456" } }),
            Some(json!("not an object")),
        );
        let resolved = theme.resolve();

        assert_eq!(resolved.theme_id, Some(3));
        assert_eq!(resolved.color_at("primary.500"), "#123456");
        assert_eq!(resolved.definition.spacing, default_definition().spacing);
    }

    #[test]
    fn null_blocks_count_as_absent() {
        let theme = row(serde_json::Value::Null, Some(serde_json::Value::Null));
        let overrides = theme.overrides();
        assert!(overrides.color_scheme.is_none());
        assert!(overrides.spacing.is_none());
    }

    #[test]
    fn draft_payload_never_claims_default() {
        let draft: ThemeDraft = serde_json::from_value(json!({
            "name": "A",
            "slug": "a",
            "isDefault": true,
            "colorScheme": { "primary": { "500": "#000000" } }
        }))
        .unwrap();
        let new = NewTheme::from_draft(&draft, Some(9));

        assert!(!new.is_default);
        assert!(new.is_active);
        assert_eq!(new.version, DEFAULT_VERSION);
        assert_eq!(new.created_by, Some(9));
        assert_eq!(new.color_scheme["primary"]["500"], "#000000");
        assert!(new.typography.is_none());
    }

    #[test]
    fn update_patch_replaces_only_given_fields() {
        let theme = row(json!({ "primary": { "500": "#123456" } }), None);
        let patch: UpdateTheme = serde_json::from_value(json!({
            "name": "Renamed",
            "isDefault": true,
            "spacing": { "scale": { "4": "20px" } }
        }))
        .unwrap();

        let draft = patch.apply_to(theme.to_draft());
        assert_eq!(draft.name.as_deref(), Some("Renamed"));
        assert_eq!(draft.slug.as_deref(), Some("legacy"));
        assert!(draft.overrides.spacing.is_some());

        let changes = patch.to_changes();
        assert_eq!(changes.is_default, None);
        assert_eq!(changes.spacing, Some(json!({ "scale": { "4": "20px" } })));
    }
}
