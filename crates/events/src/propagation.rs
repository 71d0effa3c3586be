//! Theme propagation.
//!
//! [`PropagationController`] is the only writer of the [`StyleDocument`].
//! It loads the active theme on mount, switches themes on request, and
//! publishes its lifecycle on a `watch` channel:
//!
//! ```text
//! Uninitialized -> Loading -> Applied <-> Switching
//!                     \          \           |
//!                      +-> Error <-----------+
//! ```
//!
//! Every request takes a token when it is issued and storage I/O is
//! serialized. A switch is skipped, and its application discarded, only
//! when a newer switch was issued: refreshes never cancel a pending
//! switch, so the newest switch always determines the active pointer.
//! A mount or refresh is skipped when any newer request was issued, since
//! that request re-reads the pointer anyway. Failures never touch the
//! document: the last applied variables stay live.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{watch, Mutex};
use vitrine_core::theming::ResolvedTheme;
use vitrine_core::types::DbId;
use vitrine_db::models::theme::Theme;
use vitrine_db::{ThemeCatalog, ThemeError};

use crate::bus::{ThemeEvent, ThemeEventBus};
use crate::document::{AppliedStyles, StyleDocument};

/// Controller lifecycle, observable through
/// [`PropagationController::subscribe`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PropagationState {
    Uninitialized,
    Loading,
    Applied { theme_id: Option<DbId>, token: u64 },
    Switching { target_theme_id: DbId, token: u64 },
    Error { message: String },
}

/// Result of a mount or switch that did not fail.
#[derive(Debug, Clone)]
pub enum SwitchOutcome {
    /// This request's variables are now live. `theme` is the stored theme
    /// they were resolved from; `None` when the defaults were applied.
    Applied {
        styles: Arc<AppliedStyles>,
        theme: Option<Theme>,
    },
    /// A newer request took over. `stored` is the theme this switch wrote
    /// into the active pointer before being overtaken; `None` when nothing
    /// was written.
    Superseded { stored: Option<Theme> },
}

impl SwitchOutcome {
    pub fn applied(&self) -> Option<&Arc<AppliedStyles>> {
        match self {
            Self::Applied { styles, .. } => Some(styles),
            Self::Superseded { .. } => None,
        }
    }

    /// The theme whose id is now in the active pointer because of this
    /// request, if any.
    pub fn stored_theme(&self) -> Option<&Theme> {
        match self {
            Self::Applied { theme, .. } => theme.as_ref(),
            Self::Superseded { stored } => stored.as_ref(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PropagationError {
    #[error("Failed to load the active theme: {0}")]
    Load(#[source] ThemeError),

    #[error("Failed to switch to theme {theme_id}: {source}")]
    Switch {
        theme_id: DbId,
        #[source]
        source: ThemeError,
    },
}

impl PropagationError {
    pub fn into_theme_error(self) -> ThemeError {
        match self {
            Self::Load(e) | Self::Switch { source: e, .. } => e,
        }
    }
}

pub struct PropagationController {
    catalog: ThemeCatalog,
    document: Arc<StyleDocument>,
    events: Arc<ThemeEventBus>,
    state: watch::Sender<PropagationState>,
    /// Newest token of any request.
    latest_token: AtomicU64,
    /// Newest token of a switch request.
    latest_switch: AtomicU64,
    io: Mutex<()>,
}

impl PropagationController {
    pub fn new(
        catalog: ThemeCatalog,
        document: Arc<StyleDocument>,
        events: Arc<ThemeEventBus>,
    ) -> Self {
        let (state, _) = watch::channel(PropagationState::Uninitialized);
        Self {
            catalog,
            document,
            events,
            state,
            latest_token: AtomicU64::new(0),
            latest_switch: AtomicU64::new(0),
            io: Mutex::new(()),
        }
    }

    pub fn document(&self) -> &Arc<StyleDocument> {
        &self.document
    }

    pub fn state(&self) -> PropagationState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<PropagationState> {
        self.state.subscribe()
    }

    /// Read the active theme from storage and apply it.
    ///
    /// Until this settles, surfaces keep rendering whatever the document
    /// already holds (the pre-paint defaults on first boot).
    pub async fn mount(&self) -> Result<SwitchOutcome, PropagationError> {
        let token = self.issue_token();
        self.load_with_token(token).await
    }

    /// Re-read and re-apply the active theme, e.g. after it was edited.
    pub async fn refresh(&self) -> Result<SwitchOutcome, PropagationError> {
        self.mount().await
    }

    /// Make theme `theme_id` active and apply it.
    ///
    /// Completes only once the pointer is stored and the new variables are
    /// live. On failure the previous variables stay live and the error is
    /// returned.
    pub async fn switch_to(&self, theme_id: DbId) -> Result<SwitchOutcome, PropagationError> {
        let token = self.issue_switch_token();
        self.switch_with_token(token, theme_id).await
    }

    async fn load_with_token(&self, token: u64) -> Result<SwitchOutcome, PropagationError> {
        let _io = self.io.lock().await;
        if !self.is_current(token, &self.latest_token) {
            return Ok(SwitchOutcome::Superseded { stored: None });
        }

        self.set_state(PropagationState::Loading);
        match self.catalog.get_active_theme().await {
            Ok(active) => {
                let resolved = active.resolve();
                Ok(match self.apply(token, &self.latest_token, resolved) {
                    Some(styles) => SwitchOutcome::Applied {
                        styles,
                        theme: active.theme,
                    },
                    None => SwitchOutcome::Superseded { stored: None },
                })
            }
            Err(e) => {
                tracing::warn!(token, error = %e, "Loading the active theme failed");
                self.fail(token, &self.latest_token, &e);
                Err(PropagationError::Load(e))
            }
        }
    }

    async fn switch_with_token(
        &self,
        token: u64,
        theme_id: DbId,
    ) -> Result<SwitchOutcome, PropagationError> {
        let _io = self.io.lock().await;
        if !self.is_current(token, &self.latest_switch) {
            tracing::debug!(token, theme_id, "Switch superseded before start");
            return Ok(SwitchOutcome::Superseded { stored: None });
        }

        self.set_state(PropagationState::Switching {
            target_theme_id: theme_id,
            token,
        });
        match self.catalog.set_active_theme(theme_id).await {
            Ok(theme) => Ok(match self.apply(token, &self.latest_switch, theme.resolve()) {
                Some(styles) => SwitchOutcome::Applied {
                    styles,
                    theme: Some(theme),
                },
                None => SwitchOutcome::Superseded {
                    stored: Some(theme),
                },
            }),
            Err(e) => {
                tracing::warn!(token, theme_id, error = %e, "Theme switch failed");
                self.fail(token, &self.latest_switch, &e);
                self.events
                    .publish(ThemeEvent::switch_failed(theme_id, e.to_string()));
                Err(PropagationError::Switch {
                    theme_id,
                    source: e,
                })
            }
        }
    }

    /// Project `theme` and install it, unless `gate` has moved past `token`.
    fn apply(
        &self,
        token: u64,
        gate: &AtomicU64,
        theme: ResolvedTheme,
    ) -> Option<Arc<AppliedStyles>> {
        let styles = AppliedStyles::from_theme(token, theme, false);
        let Some(installed) = self.document.publish(styles, token, gate) else {
            tracing::debug!(token, "Theme application superseded");
            return None;
        };

        let theme = &installed.theme;
        tracing::info!(
            token,
            theme_id = ?theme.theme_id,
            slug = %theme.slug,
            variables = installed.variables.len(),
            "Theme applied"
        );
        self.set_state(PropagationState::Applied {
            theme_id: theme.theme_id,
            token,
        });
        self.events
            .publish(ThemeEvent::applied(theme.theme_id, theme.slug.clone(), token));
        Some(installed)
    }

    fn fail(&self, token: u64, gate: &AtomicU64, error: &ThemeError) {
        if self.is_current(token, gate) {
            self.set_state(PropagationState::Error {
                message: error.to_string(),
            });
        }
    }

    fn issue_token(&self) -> u64 {
        self.latest_token.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn issue_switch_token(&self) -> u64 {
        let token = self.issue_token();
        self.latest_switch.fetch_max(token, Ordering::SeqCst);
        token
    }

    fn is_current(&self, token: u64, gate: &AtomicU64) -> bool {
        gate.load(Ordering::SeqCst) == token
    }

    fn set_state(&self, state: PropagationState) {
        tracing::debug!(?state, "Propagation state changed");
        self.state.send_replace(state);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
