//! Read side of the live theme: what every storefront surface renders.
//!
//! All reads come from the style document snapshot, never from storage,
//! so they keep answering with the last applied theme while the store is
//! unreachable.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::State;
use axum::http::header;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};
use vitrine_events::{AppliedStyles, PropagationState};

use crate::response::DataResponse;
use crate::state::AppState;

const SSE_KEEP_ALIVE: Duration = Duration::from_secs(15);

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveTheme<'a> {
    pub propagation: PropagationState,
    #[serde(flatten)]
    pub styles: &'a AppliedStyles,
}

/// GET /api/v1/theme
///
/// The applied theme, its variables and the controller state.
pub async fn get_live_theme(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.controller.document().snapshot();
    Json(DataResponse {
        data: LiveTheme {
            propagation: state.controller.state(),
            styles: &snapshot,
        },
    })
    .into_response()
}

/// GET /api/v1/theme/variables
pub async fn get_variables(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.controller.document().snapshot();
    Json(DataResponse {
        data: &snapshot.variables,
    })
    .into_response()
}

/// GET /theme.css
///
/// Live stylesheet: `:root` variables plus the utility rules.
pub async fn get_stylesheet(State(state): State<AppState>) -> impl IntoResponse {
    let css = state.controller.document().snapshot().stylesheet();
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        css,
    )
}

/// GET /api/v1/theme/events
///
/// Server-sent stream of theme events. Each event is named after
/// [`vitrine_events::ThemeEvent::name`] and carries the event as JSON.
/// A subscriber that falls behind skips the missed events.
pub async fn theme_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(state.events.subscribe()).filter_map(|item| match item {
        Ok(event) => match Event::default().event(event.name()).json_data(&event) {
            Ok(sse) => Some(Ok(sse)),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to encode theme event");
                None
            }
        },
        Err(e) => {
            tracing::debug!(error = %e, "Theme event subscriber lagged");
            None
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::new().interval(SSE_KEEP_ALIVE))
}
