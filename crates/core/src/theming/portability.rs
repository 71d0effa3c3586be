//! Theme export/import documents.
//!
//! An export bundles theme drafts with provenance; an import walks the
//! records one by one so a single malformed entry can be reported without
//! discarding the rest of the batch.

use serde::{Deserialize, Serialize};

use crate::theming::schema::ThemeDraft;
use crate::theming::validation::validate_for_storage;
use crate::types::Timestamp;

/// Format version written into every export document.
pub const EXPORT_FORMAT_VERSION: &str = "1.0";

/// A portable bundle of themes.
///
/// `themes` holds raw JSON so that import can parse and report each record
/// individually.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExportDocument {
    pub version: String,
    pub exported_at: Timestamp,
    pub exported_by: String,
    pub themes: Vec<serde_json::Value>,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl ThemeExportDocument {
    /// Build a document from drafts.
    pub fn new(drafts: &[ThemeDraft], exported_by: impl Into<String>, exported_at: Timestamp) -> Self {
        let themes: Vec<serde_json::Value> = drafts
            .iter()
            .filter_map(|d| serde_json::to_value(d).ok())
            .collect();
        let metadata = serde_json::json!({
            "themeCount": themes.len(),
            "platformVersion": env!("CARGO_PKG_VERSION"),
        });

        Self {
            version: EXPORT_FORMAT_VERSION.to_string(),
            exported_at,
            exported_by: exported_by.into(),
            themes,
            metadata,
        }
    }
}

fn default_skip_invalid() -> bool {
    true
}

/// How an import treats conflicts and invalid records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOptions {
    /// Replace an existing theme with the same slug instead of skipping it.
    #[serde(default)]
    pub overwrite_existing: bool,
    /// Record invalid or conflicting entries and continue. When `false`
    /// the first such entry aborts the whole import before anything is
    /// written.
    #[serde(default = "default_skip_invalid")]
    pub skip_invalid: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            overwrite_existing: false,
            skip_invalid: default_skip_invalid(),
        }
    }
}

/// Outcome of an import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    /// Slugs of newly created themes.
    pub imported: Vec<String>,
    /// Slugs of existing themes replaced by the import.
    pub updated: Vec<String>,
    /// Number of records skipped.
    pub skipped: usize,
    /// One message per skipped record.
    pub errors: Vec<String>,
}

impl ImportReport {
    pub fn record_skip(&mut self, message: String) {
        self.skipped += 1;
        self.errors.push(message);
    }
}

/// Parse and validate one import record.
///
/// On failure returns a message naming the record by position (1-based)
/// and, when known, by slug.
pub fn parse_import_record(index: usize, raw: &serde_json::Value) -> Result<ThemeDraft, String> {
    let label = match raw.get("slug").and_then(|s| s.as_str()) {
        Some(slug) => format!("Theme #{} ('{slug}')", index + 1),
        None => format!("Theme #{}", index + 1),
    };

    let draft: ThemeDraft = serde_json::from_value(raw.clone())
        .map_err(|e| format!("{label}: malformed theme document: {e}"))?;

    let errors = validate_for_storage(&draft);
    if errors.is_empty() {
        Ok(draft)
    } else {
        Err(format!("{label}: {}", errors.join("; ")))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
