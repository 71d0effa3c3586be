//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?active_only=` filter for theme listings. Soft-disabled themes are
/// included unless set.
#[derive(Debug, Default, Deserialize)]
pub struct ActiveOnlyParams {
    #[serde(default)]
    pub active_only: bool,
}
