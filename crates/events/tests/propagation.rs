//! Integration tests for theme propagation against the in-memory store.

use std::sync::Arc;

use assert_matches::assert_matches;
use serde_json::json;
use vitrine_core::error::CoreError;
use vitrine_core::theming::default_definition;
use vitrine_db::models::theme::Theme;
use vitrine_db::{MemoryThemeStore, ThemeCatalog, ThemeError};
use vitrine_events::{
    PropagationController, PropagationError, PropagationState, StyleDocument, SwitchOutcome,
    ThemeEvent, ThemeEventBus,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Harness {
    store: Arc<MemoryThemeStore>,
    catalog: ThemeCatalog,
    events: Arc<ThemeEventBus>,
    controller: Arc<PropagationController>,
}

fn harness() -> Harness {
    let store = Arc::new(MemoryThemeStore::new());
    let catalog = ThemeCatalog::new(store.clone());
    let events = Arc::new(ThemeEventBus::default());
    let controller = Arc::new(PropagationController::new(
        catalog.clone(),
        Arc::new(StyleDocument::prepaint()),
        events.clone(),
    ));
    Harness {
        store,
        catalog,
        events,
        controller,
    }
}

async fn create(catalog: &ThemeCatalog, slug: &str, primary_500: &str, enabled: bool) -> Theme {
    let draft = serde_json::from_value(json!({
        "name": slug,
        "slug": slug,
        "isActive": enabled,
        "colorScheme": {
            "primary": { "500": primary_500 },
            "secondary": {},
            "neutral": {},
            "background": {},
            "text": {},
            "border": {}
        }
    }))
    .unwrap();
    catalog.create_theme(&draft, None).await.unwrap()
}

fn primary_500(h: &Harness) -> String {
    h.controller.document().snapshot().variables["color-primary-500"].clone()
}

// ---------------------------------------------------------------------------
// Mount
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mount_without_active_theme_applies_defaults() {
    let h = harness();
    assert_eq!(h.controller.state(), PropagationState::Uninitialized);

    let outcome = h.controller.mount().await.unwrap();
    let styles = outcome.applied().expect("mount should apply");

    assert!(!styles.placeholder);
    assert_eq!(styles.theme.theme_id, None);
    assert_eq!(styles.theme.definition, *default_definition());
    assert_matches!(
        h.controller.state(),
        PropagationState::Applied { theme_id: None, .. }
    );
}

#[tokio::test]
async fn mount_applies_stored_active_theme() {
    let h = harness();
    let seeded = h.catalog.seed_defaults().await.unwrap();
    let mut rx = h.events.subscribe();

    h.controller.mount().await.unwrap();

    let snap = h.controller.document().snapshot();
    assert_eq!(snap.theme.theme_id, Some(seeded.id));
    assert_matches!(rx.recv().await.unwrap(), ThemeEvent::Applied { theme_id, .. } if theme_id == Some(seeded.id));
}

#[tokio::test]
async fn failed_mount_keeps_prepaint_variables() {
    let h = harness();
    h.store.set_offline(true);

    let err = h.controller.mount().await.unwrap_err();

    assert_matches!(err, PropagationError::Load(ThemeError::Database(_)));
    let snap = h.controller.document().snapshot();
    assert!(snap.placeholder);
    assert_eq!(primary_500(&h), default_definition().color_scheme.primary.s500);
    assert_matches!(h.controller.state(), PropagationState::Error { .. });
}

// ---------------------------------------------------------------------------
// Switch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn switch_applies_new_variables_after_pointer_write() {
    let h = harness();
    h.catalog.seed_defaults().await.unwrap();
    h.controller.mount().await.unwrap();
    let red = create(&h.catalog, "red", "#ff0000", true).await;
    let mut states = h.controller.subscribe();

    let outcome = h.controller.switch_to(red.id).await.unwrap();

    assert!(outcome.applied().is_some());
    assert_eq!(primary_500(&h), "#ff0000");
    assert_eq!(
        h.catalog.get_settings().await.unwrap().active_theme_id,
        Some(red.id)
    );
    assert!(states.has_changed().unwrap());
    assert_matches!(
        *states.borrow_and_update(),
        PropagationState::Applied { theme_id, .. } if theme_id == Some(red.id)
    );
}

#[tokio::test]
async fn switch_to_disabled_theme_keeps_previous_styles() {
    let h = harness();
    h.catalog.seed_defaults().await.unwrap();
    h.controller.mount().await.unwrap();
    let before = h.controller.document().snapshot();
    let dormant = create(&h.catalog, "dormant", "#00ff00", false).await;
    let mut rx = h.events.subscribe();

    let err = h.controller.switch_to(dormant.id).await.unwrap_err();

    assert_matches!(
        err,
        PropagationError::Switch { source: ThemeError::Core(CoreError::Validation(_)), .. }
    );
    assert!(Arc::ptr_eq(&before, &h.controller.document().snapshot()));
    assert_matches!(h.controller.state(), PropagationState::Error { .. });
    assert_matches!(rx.recv().await.unwrap(), ThemeEvent::SwitchFailed { theme_id, .. } if theme_id == dormant.id);
}

#[tokio::test]
async fn outage_during_switch_keeps_last_known_good() {
    let h = harness();
    h.catalog.seed_defaults().await.unwrap();
    let red = create(&h.catalog, "red", "#ff0000", true).await;
    h.controller.switch_to(red.id).await.unwrap();
    let blue = create(&h.catalog, "blue", "#0000ff", true).await;

    h.store.set_offline(true);
    let err = h.controller.switch_to(blue.id).await.unwrap_err();
    h.store.set_offline(false);

    assert_matches!(
        err.into_theme_error(),
        ThemeError::Database(sqlx::Error::PoolTimedOut)
    );
    assert_eq!(primary_500(&h), "#ff0000");

    // Recovery needs an explicit request; nothing retries on its own.
    h.controller.switch_to(blue.id).await.unwrap();
    assert_eq!(primary_500(&h), "#0000ff");
}

#[tokio::test]
async fn concurrent_switches_leave_document_matching_pointer() {
    let h = harness();
    h.catalog.seed_defaults().await.unwrap();
    h.controller.mount().await.unwrap();
    let red = create(&h.catalog, "red", "#ff0000", true).await;
    let blue = create(&h.catalog, "blue", "#0000ff", true).await;

    let (a, b) = {
        let c1 = h.controller.clone();
        let c2 = h.controller.clone();
        tokio::join!(
            tokio::spawn(async move { c1.switch_to(red.id).await }),
            tokio::spawn(async move { c2.switch_to(blue.id).await }),
        )
    };
    let a = a.unwrap().unwrap();
    let b = b.unwrap().unwrap();
    assert!(a.applied().is_some() || b.applied().is_some());

    let pointer = h.catalog.get_settings().await.unwrap().active_theme_id;
    let live = h.controller.document().snapshot().theme.theme_id;
    assert_eq!(pointer, live);
}

#[tokio::test]
async fn refresh_racing_switch_never_cancels_it() {
    let h = harness();
    h.catalog.seed_defaults().await.unwrap();
    h.controller.mount().await.unwrap();
    let red = create(&h.catalog, "red", "#ff0000", true).await;

    let (switch, refresh) = {
        let c1 = h.controller.clone();
        let c2 = h.controller.clone();
        tokio::join!(
            tokio::spawn(async move { c1.switch_to(red.id).await }),
            tokio::spawn(async move { c2.refresh().await }),
        )
    };
    let switch = switch.unwrap().unwrap();
    refresh.unwrap().unwrap();

    assert!(switch.applied().is_some());
    assert_eq!(switch.stored_theme().map(|t| t.id), Some(red.id));
    assert_eq!(
        h.catalog.get_settings().await.unwrap().active_theme_id,
        Some(red.id)
    );
    assert_eq!(primary_500(&h), "#ff0000");
}

#[tokio::test]
async fn overtaken_switch_reports_its_pointer_write() {
    let h = harness();
    h.catalog.seed_defaults().await.unwrap();
    h.controller.mount().await.unwrap();
    let red = create(&h.catalog, "red", "#ff0000", true).await;
    let blue = create(&h.catalog, "blue", "#0000ff", true).await;

    let (a, b) = {
        let c1 = h.controller.clone();
        let c2 = h.controller.clone();
        tokio::join!(
            tokio::spawn(async move { c1.switch_to(red.id).await }),
            tokio::spawn(async move { c2.switch_to(blue.id).await }),
        )
    };
    let pointer = h.catalog.get_settings().await.unwrap().active_theme_id;

    for outcome in [a.unwrap().unwrap(), b.unwrap().unwrap()] {
        match outcome {
            SwitchOutcome::Applied { theme, .. } => {
                assert_eq!(theme.map(|t| t.id), pointer);
            }
            // Either skipped before writing, or wrote and was overtaken.
            SwitchOutcome::Superseded { stored } => {
                if let Some(stored) = stored {
                    assert_ne!(Some(stored.id), pointer);
                }
            }
        }
    }
}

#[tokio::test]
async fn snapshots_are_immutable_across_switches() {
    let h = harness();
    h.catalog.seed_defaults().await.unwrap();
    h.controller.mount().await.unwrap();
    let held = h.controller.document().snapshot();
    let red = create(&h.catalog, "red", "#ff0000", true).await;

    h.controller.switch_to(red.id).await.unwrap();

    assert_eq!(
        held.variables["color-primary-500"],
        default_definition().color_scheme.primary.s500
    );
    assert_eq!(primary_500(&h), "#ff0000");
}
