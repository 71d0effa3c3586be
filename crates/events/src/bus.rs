//! In-process theme event bus backed by a `tokio::sync::broadcast` channel.
//!
//! Other surfaces (SSE clients, caches) subscribe to learn that the live
//! theme changed and reload their view of it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use vitrine_core::types::DbId;

// ---------------------------------------------------------------------------
// ThemeEvent
// ---------------------------------------------------------------------------

/// What happened to a stored theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeChange {
    Created,
    Updated,
    Deleted,
    DefaultChanged,
    Imported,
    SettingsUpdated,
}

/// A theme lifecycle event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ThemeEvent {
    /// New variables were written into the live style document.
    Applied {
        theme_id: Option<DbId>,
        slug: String,
        token: u64,
        timestamp: DateTime<Utc>,
    },
    /// A requested switch failed; the previous variables stay live.
    SwitchFailed {
        theme_id: DbId,
        error: String,
        timestamp: DateTime<Utc>,
    },
    /// A stored theme or the settings changed.
    Changed {
        theme_id: Option<DbId>,
        change: ThemeChange,
        timestamp: DateTime<Utc>,
    },
}

impl ThemeEvent {
    pub fn applied(theme_id: Option<DbId>, slug: impl Into<String>, token: u64) -> Self {
        Self::Applied {
            theme_id,
            slug: slug.into(),
            token,
            timestamp: Utc::now(),
        }
    }

    pub fn switch_failed(theme_id: DbId, error: impl Into<String>) -> Self {
        Self::SwitchFailed {
            theme_id,
            error: error.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn changed(theme_id: Option<DbId>, change: ThemeChange) -> Self {
        Self::Changed {
            theme_id,
            change,
            timestamp: Utc::now(),
        }
    }

    /// Dot-separated event name, used as the SSE event field.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Applied { .. } => "theme.applied",
            Self::SwitchFailed { .. } => "theme.switch_failed",
            Self::Changed { .. } => "theme.changed",
        }
    }
}

// ---------------------------------------------------------------------------
// ThemeEventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// In-process fan-out bus for [`ThemeEvent`]s, shared as
/// `Arc<ThemeEventBus>`.
pub struct ThemeEventBus {
    sender: broadcast::Sender<ThemeEvent>,
}

impl ThemeEventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// Slow receivers observe `RecvError::Lagged` once the buffer is full.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers. Dropped when nobody
    /// is listening.
    pub fn publish(&self, event: ThemeEvent) {
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ThemeEvent> {
        self.sender.subscribe()
    }
}

impl Default for ThemeEventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_published_events() {
        let bus = ThemeEventBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(ThemeEvent::changed(Some(4), ThemeChange::Updated));

        let e1 = rx1.recv().await.expect("subscriber 1 should receive");
        let e2 = rx2.recv().await.expect("subscriber 2 should receive");
        assert_eq!(e1, e2);
        assert_eq!(e1.name(), "theme.changed");
    }

    #[test]
    fn publish_with_no_subscribers_does_not_panic() {
        let bus = ThemeEventBus::default();
        bus.publish(ThemeEvent::switch_failed(1, "boom"));
    }

    #[test]
    fn events_serialize_with_type_tag() {
        let value = serde_json::to_value(ThemeEvent::applied(Some(2), "autumn", 9)).unwrap();
        assert_eq!(value["type"], "applied");
        assert_eq!(value["themeId"], 2);
        assert_eq!(value["slug"], "autumn");
        assert_eq!(value["token"], 9);

        let value =
            serde_json::to_value(ThemeEvent::changed(None, ThemeChange::DefaultChanged)).unwrap();
        assert_eq!(value["type"], "changed");
        assert_eq!(value["change"], "default_changed");
        assert!(value["themeId"].is_null());
    }
}
