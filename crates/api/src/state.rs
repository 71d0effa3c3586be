use std::sync::Arc;

use vitrine_db::{ThemeCatalog, ThemeStore};
use vitrine_events::{PropagationController, StyleDocument, ThemeEventBus};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Theme lifecycle operations over the configured store.
    pub catalog: ThemeCatalog,
    /// Sole writer of the live style document.
    pub controller: Arc<PropagationController>,
    /// Theme lifecycle events, fanned out to SSE subscribers.
    pub events: Arc<ThemeEventBus>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire the catalog, the pre-painted style document and the
    /// controller around `store`.
    pub fn new(store: Arc<dyn ThemeStore>, config: ServerConfig) -> Self {
        let catalog = ThemeCatalog::new(store);
        let events = Arc::new(ThemeEventBus::default());
        let controller = Arc::new(PropagationController::new(
            catalog.clone(),
            Arc::new(StyleDocument::prepaint()),
            Arc::clone(&events),
        ));

        Self {
            catalog,
            controller,
            events,
            config: Arc::new(config),
        }
    }
}
