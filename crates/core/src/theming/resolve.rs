//! Theme resolution.
//!
//! [`resolve`] backfills a partially specified theme against the defaults,
//! producing a [`ThemeDefinition`] with every schema field populated. It is
//! total and pure: identical inputs give equal outputs and nothing can fail.
//!
//! Every section merges per key, including typography, spacing and borders
//! (a partial `spacing` block keeps the default steps it does not mention).

use serde::{Deserialize, Serialize};

use crate::theming::defaults::{
    default_definition, DEFAULT_PRIMARY_BASE, DEFAULT_THEME_NAME, DEFAULT_THEME_SLUG,
    DEFAULT_THEME_VERSION,
};
use crate::theming::schema::{ThemeDefinition, ThemeOverrides, TokenGroup};
use crate::types::DbId;

/// Colour returned by [`color_at`] when a path does not resolve.
pub const FALLBACK_COLOR: &str = DEFAULT_PRIMARY_BASE;

/// Gradient returned by [`gradient_at`] for unknown names.
pub const FALLBACK_GRADIENT: &str = "linear-gradient(135deg, #70843d 0%, #485527 100%)";

/// Backfill `candidate` against the defaults.
///
/// `None` yields the defaults verbatim.
pub fn resolve(candidate: Option<&ThemeOverrides>) -> ThemeDefinition {
    let defaults = default_definition();
    let Some(candidate) = candidate else {
        return defaults.clone();
    };

    ThemeDefinition {
        color_scheme: match &candidate.color_scheme {
            Some(partial) => defaults.color_scheme.merged(partial),
            None => defaults.color_scheme.clone(),
        },
        typography: match &candidate.typography {
            Some(partial) => defaults.typography.merged(partial),
            None => defaults.typography.clone(),
        },
        spacing: match &candidate.spacing {
            Some(partial) => defaults.spacing.merged(partial),
            None => defaults.spacing.clone(),
        },
        borders: match &candidate.borders {
            Some(partial) => defaults.borders.merged(partial),
            None => defaults.borders.clone(),
        },
    }
}

/// A fully populated theme together with the identity it was resolved for.
///
/// This is what renderers and the variable projection consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTheme {
    /// Stored theme id; `None` when resolved from defaults alone.
    pub theme_id: Option<DbId>,
    pub name: String,
    pub slug: String,
    pub version: String,
    #[serde(flatten)]
    pub definition: ThemeDefinition,
}

impl ResolvedTheme {
    /// Resolve `overrides` and attach the given identity.
    pub fn new(
        theme_id: Option<DbId>,
        name: impl Into<String>,
        slug: impl Into<String>,
        version: impl Into<String>,
        overrides: Option<&ThemeOverrides>,
    ) -> Self {
        Self {
            theme_id,
            name: name.into(),
            slug: slug.into(),
            version: version.into(),
            definition: resolve(overrides),
        }
    }

    /// The default theme, used when no theme has ever been activated.
    pub fn defaults() -> Self {
        Self::new(
            None,
            DEFAULT_THEME_NAME,
            DEFAULT_THEME_SLUG,
            DEFAULT_THEME_VERSION,
            None,
        )
    }

    /// Resolve this theme again; the result equals `self`.
    pub fn re_resolved(&self) -> Self {
        Self {
            definition: resolve(Some(&self.definition.to_overrides())),
            ..self.clone()
        }
    }

    pub fn color_at(&self, path: &str) -> &str {
        color_at(self, path)
    }

    pub fn gradient_at(&self, name: &str) -> &str {
        gradient_at(self, name)
    }
}

/// Navigate the colour scheme by a dotted path such as `"primary.500"`,
/// `"text.link"` or `"ui.badge.sale"`.
///
/// Returns [`FALLBACK_COLOR`] when any segment is missing or the path does
/// not end on a value. Never fails.
pub fn color_at<'a>(theme: &'a ResolvedTheme, path: &str) -> &'a str {
    lookup_color(theme, path).unwrap_or(FALLBACK_COLOR)
}

fn lookup_color<'a>(theme: &'a ResolvedTheme, path: &str) -> Option<&'a str> {
    let scheme = &theme.definition.color_scheme;
    let segments: Vec<&str> = path.split('.').collect();

    match segments.as_slice() {
        ["background", key] => scheme.background.lookup(key),
        ["text", key] => scheme.text.lookup(key),
        ["border", key] => scheme.border.lookup(key),
        ["gradients", key] => scheme.gradients.lookup(key),
        ["ui", group, key] => scheme.ui.group(group)?.lookup(key),
        [section, step] => scheme.scale(section)?.lookup(step),
        _ => None,
    }
}

/// Look up a named gradient, falling back to [`FALLBACK_GRADIENT`].
pub fn gradient_at<'a>(theme: &'a ResolvedTheme, name: &str) -> &'a str {
    theme
        .definition
        .color_scheme
        .gradients
        .lookup(name)
        .unwrap_or(FALLBACK_GRADIENT)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theming::schema::{
        ColorScale, PartialBadgeColors, PartialColorScale, PartialColorScheme, PartialSpacing,
        PartialSpacingScale, PartialTypography, PartialUiColors,
    };

    fn primary_500(value: &str) -> ThemeOverrides {
        ThemeOverrides {
            color_scheme: Some(PartialColorScheme {
                primary: Some(PartialColorScale {
                    s500: Some(value.to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn no_candidate_yields_defaults() {
        assert_eq!(resolve(None), *default_definition());
    }

    #[test]
    fn empty_candidate_yields_defaults() {
        assert_eq!(resolve(Some(&ThemeOverrides::default())), *default_definition());
    }

    #[test]
    fn scale_overrides_merge_per_step() {
        let resolved = resolve(Some(&primary_500("#111111")));
        let defaults = default_definition();

        assert_eq!(resolved.color_scheme.primary.s500, "#111111");
        assert_eq!(resolved.color_scheme.primary.s50, defaults.color_scheme.primary.s50);
        assert_eq!(resolved.color_scheme.primary.s950, defaults.color_scheme.primary.s950);
        assert_eq!(resolved.color_scheme.success, defaults.color_scheme.success);
    }

    #[test]
    fn ui_groups_merge_per_key() {
        let overrides = ThemeOverrides {
            color_scheme: Some(PartialColorScheme {
                ui: Some(PartialUiColors {
                    badge: Some(PartialBadgeColors {
                        sale: Some("#ff00ff".into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let resolved = resolve(Some(&overrides));
        let defaults = default_definition();
        assert_eq!(resolved.color_scheme.ui.badge.sale, "#ff00ff");
        assert_eq!(resolved.color_scheme.ui.badge.new, defaults.color_scheme.ui.badge.new);
        assert_eq!(resolved.color_scheme.ui.nav, defaults.color_scheme.ui.nav);
    }

    #[test]
    fn partial_spacing_keeps_default_steps() {
        let overrides = ThemeOverrides {
            spacing: Some(PartialSpacing {
                scale: Some(PartialSpacingScale {
                    s4: Some("20px".into()),
                    ..Default::default()
                }),
                container: None,
            }),
            typography: Some(PartialTypography::default()),
            ..Default::default()
        };

        let resolved = resolve(Some(&overrides));
        let defaults = default_definition();
        assert_eq!(resolved.spacing.scale.s4, "20px");
        assert_eq!(resolved.spacing.scale.s8, defaults.spacing.scale.s8);
        assert_eq!(resolved.spacing.container, defaults.spacing.container);
        assert_eq!(resolved.typography, defaults.typography);
    }

    #[test]
    fn resolution_is_deterministic_and_idempotent() {
        let overrides = primary_500("#222222");
        let once = ResolvedTheme::new(Some(7), "T", "t", "1.0.0", Some(&overrides));
        let again = ResolvedTheme::new(Some(7), "T", "t", "1.0.0", Some(&overrides));

        assert_eq!(once, again);
        assert_eq!(once.re_resolved(), once);
    }

    #[test]
    fn color_at_navigates_every_section_kind() {
        let theme = ResolvedTheme::defaults();
        let scheme = &theme.definition.color_scheme;

        assert_eq!(theme.color_at("primary.500"), scheme.primary.s500);
        assert_eq!(theme.color_at("warning.950"), scheme.warning.s950);
        assert_eq!(theme.color_at("text.link"), scheme.text.link);
        assert_eq!(theme.color_at("text.linkHover"), scheme.text.link_hover);
        assert_eq!(theme.color_at("ui.badge.sale"), scheme.ui.badge.sale);
        assert_eq!(theme.color_at("ui.status.outOfStock"), scheme.ui.status.out_of_stock);
    }

    #[test]
    fn color_at_falls_back_on_any_miss() {
        let theme = ResolvedTheme::defaults();

        assert_eq!(theme.color_at("primary.9999"), FALLBACK_COLOR);
        assert_eq!(theme.color_at("nonexistent.path"), FALLBACK_COLOR);
        assert_eq!(theme.color_at("primary"), FALLBACK_COLOR);
        assert_eq!(theme.color_at("ui.badge"), FALLBACK_COLOR);
        assert_eq!(theme.color_at("ui.badge.sale.extra"), FALLBACK_COLOR);
        assert_eq!(theme.color_at(""), FALLBACK_COLOR);
        assert_eq!(FALLBACK_COLOR, "#70843d");
    }

    #[test]
    fn color_at_reflects_overrides() {
        let theme = ResolvedTheme::new(None, "T", "t", "1", Some(&primary_500("#ff0000")));
        assert_eq!(theme.color_at("primary.500"), "#ff0000");
        assert_eq!(
            theme.color_at("success.500"),
            default_definition().color_scheme.success.s500
        );
    }

    #[test]
    fn gradient_lookup_and_fallback() {
        let theme = ResolvedTheme::defaults();
        assert_eq!(
            theme.gradient_at("button"),
            theme.definition.color_scheme.gradients.button
        );
        assert_eq!(theme.gradient_at("rainbow"), FALLBACK_GRADIENT);
    }

    #[test]
    fn every_scale_is_complete_after_resolution() {
        let resolved = resolve(Some(&primary_500("#010101")));
        for (_, scale) in resolved.color_scheme.scales() {
            assert_eq!(scale.entries().len(), ColorScale::KEYS.len());
            assert!(scale.entries().iter().all(|(_, v)| !v.is_empty()));
        }
    }
}
