//! The live style document.
//!
//! Holds the one variable namespace every rendered surface reads. Readers
//! take an `Arc` snapshot and never observe a partial write: an
//! application swaps the whole snapshot under a single lock acquisition.
//! Only the [`crate::propagation::PropagationController`] writes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;
use vitrine_core::theming::css::{render_prepaint_tag, render_root_block, utility_rules};
use vitrine_core::theming::{project_variables, ResolvedTheme, ThemeVariables};
use vitrine_core::types::Timestamp;

/// One complete application of a theme.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedStyles {
    /// Request token of the application that wrote this snapshot; `0` for
    /// the pre-paint placeholder.
    pub token: u64,
    /// `true` until a theme read from storage has been applied.
    pub placeholder: bool,
    pub theme: ResolvedTheme,
    pub variables: ThemeVariables,
    pub applied_at: Timestamp,
}

impl AppliedStyles {
    pub fn from_theme(token: u64, theme: ResolvedTheme, placeholder: bool) -> Self {
        let variables = project_variables(&theme);
        Self {
            token,
            placeholder,
            theme,
            variables,
            applied_at: chrono::Utc::now(),
        }
    }

    /// Full stylesheet: the variable block followed by the utility rules.
    pub fn stylesheet(&self) -> String {
        let mut css = render_root_block(&self.variables);
        css.push('\n');
        css.push_str(&utility_rules());
        css
    }
}

pub struct StyleDocument {
    current: RwLock<Arc<AppliedStyles>>,
}

impl StyleDocument {
    /// A document seeded with the default theme, for use before the first
    /// read from storage completes.
    pub fn prepaint() -> Self {
        Self {
            current: RwLock::new(Arc::new(AppliedStyles::from_theme(
                0,
                ResolvedTheme::defaults(),
                true,
            ))),
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<AppliedStyles> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// `<style>` tag with the current variables, for injection into server
    /// rendered markup ahead of hydration.
    pub fn prepaint_tag(&self) -> String {
        render_prepaint_tag(&self.snapshot().variables)
    }

    /// Install `styles` if `token` is still the latest issued request
    /// token. The check and the swap happen under one write lock.
    ///
    /// Returns the installed snapshot, or `None` when the application was
    /// superseded.
    pub(crate) fn publish(
        &self,
        styles: AppliedStyles,
        token: u64,
        latest: &AtomicU64,
    ) -> Option<Arc<AppliedStyles>> {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if latest.load(Ordering::SeqCst) != token {
            return None;
        }
        let styles = Arc::new(styles);
        *current = styles.clone();
        Some(styles)
    }
}

impl Default for StyleDocument {
    fn default() -> Self {
        Self::prepaint()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::theming::schema::{PartialColorScale, PartialColorScheme};
    use vitrine_core::theming::ThemeOverrides;

    fn red_theme() -> ResolvedTheme {
        let overrides = ThemeOverrides {
            color_scheme: Some(PartialColorScheme {
                primary: Some(PartialColorScale {
                    s500: Some("#ff0000".into()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        ResolvedTheme::new(Some(5), "Red", "red", "1.0.0", Some(&overrides))
    }

    #[test]
    fn prepaint_holds_default_placeholder() {
        let doc = StyleDocument::prepaint();
        let snap = doc.snapshot();
        assert!(snap.placeholder);
        assert_eq!(snap.token, 0);
        assert_eq!(snap.variables, project_variables(&ResolvedTheme::defaults()));
        assert!(doc.prepaint_tag().starts_with("<style id=\"theme-variables\">"));
    }

    #[test]
    fn publish_swaps_whole_snapshot() {
        let doc = StyleDocument::prepaint();
        let before = doc.snapshot();
        let latest = AtomicU64::new(1);

        let installed = doc
            .publish(AppliedStyles::from_theme(1, red_theme(), false), 1, &latest)
            .expect("current token should install");

        assert_eq!(installed.variables["color-primary-500"], "#ff0000");
        assert!(Arc::ptr_eq(&installed, &doc.snapshot()));
        // Earlier snapshots are untouched.
        assert_eq!(before.variables["color-primary-500"], "#70843d");
    }

    #[test]
    fn stale_token_is_discarded() {
        let doc = StyleDocument::prepaint();
        let latest = AtomicU64::new(3);

        let result = doc.publish(AppliedStyles::from_theme(2, red_theme(), false), 2, &latest);

        assert!(result.is_none());
        assert!(doc.snapshot().placeholder);
    }

    #[test]
    fn stylesheet_contains_variables_and_utilities() {
        let styles = AppliedStyles::from_theme(1, red_theme(), false);
        let css = styles.stylesheet();
        assert!(css.contains("--color-primary-500: #ff0000;"));
        assert!(css.contains(".btn-primary {"));
    }
}
