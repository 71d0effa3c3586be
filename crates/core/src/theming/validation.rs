//! Structural validation of untrusted theme documents.
//!
//! Every check runs; errors accumulate in check order and the input is
//! never mutated. Slug uniqueness is a storage concern and is not checked
//! here.

use validator::Validate;

use crate::theming::palette::hex_to_rgb;
use crate::theming::schema::ThemeDraft;

/// Colour-scheme sections a theme document must carry.
pub const REQUIRED_SECTIONS: [&str; 6] =
    ["primary", "secondary", "neutral", "background", "text", "border"];

/// Maximum length of a theme slug.
pub const MAX_SLUG_LEN: usize = 120;

/// Validate the shape of a theme document.
///
/// Returns an empty list when the document is valid.
pub fn validate_theme(draft: &ThemeDraft) -> Vec<String> {
    let mut errors = Vec::new();

    if is_blank(draft.name.as_deref()) {
        errors.push("Theme name is required".to_string());
    }

    if is_blank(draft.slug.as_deref()) {
        errors.push("Theme slug is required".to_string());
    }

    match &draft.overrides.color_scheme {
        None => errors.push("Color scheme is required".to_string()),
        Some(scheme) => {
            for section in REQUIRED_SECTIONS {
                if !scheme.has_section(section) {
                    errors.push(format!("Color scheme section '{section}' is required"));
                }
            }

            if let Some(primary) = &scheme.primary {
                match primary.s500.as_deref() {
                    None => errors.push("Primary palette must define the 500 shade".to_string()),
                    Some(base) if hex_to_rgb(base).is_err() => errors.push(format!(
                        "Primary 500 shade '{base}' is not a valid hex color"
                    )),
                    Some(_) => {}
                }
            }
        }
    }

    errors
}

/// Validate a slug's character set: lowercase ASCII letters, digits and
/// single hyphens, not starting or ending with a hyphen.
pub fn validate_slug_format(slug: &str) -> Result<(), String> {
    if slug.len() > MAX_SLUG_LEN {
        return Err(format!(
            "Theme slug too long: {} chars (max {MAX_SLUG_LEN})",
            slug.len()
        ));
    }
    let well_formed = !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if well_formed {
        Ok(())
    } else {
        Err(format!(
            "Theme slug '{slug}' may only contain lowercase letters, digits and single hyphens"
        ))
    }
}

/// Field-length checks from the derived [`Validate`] impl, flattened into
/// sorted human-readable messages.
pub fn field_limit_errors(draft: &ThemeDraft) -> Vec<String> {
    let Err(errors) = draft.validate() else {
        return Vec::new();
    };

    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(move |e| format!("Field '{field}' failed the {} check", e.code))
        })
        .collect();
    messages.sort();
    messages
}

/// Run every check that applies to a draft about to be stored: the shape
/// checks, the slug format and the field limits.
pub fn validate_for_storage(draft: &ThemeDraft) -> Vec<String> {
    let mut errors = validate_theme(draft);
    if let Some(slug) = draft.slug.as_deref().filter(|s| !s.trim().is_empty()) {
        if let Err(msg) = validate_slug_format(slug) {
            errors.push(msg);
        }
    }
    errors.extend(field_limit_errors(draft));
    errors
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(value: serde_json::Value) -> ThemeDraft {
        serde_json::from_value(value).unwrap()
    }

    fn minimal_valid() -> serde_json::Value {
        json!({
            "name": "Harvest",
            "slug": "harvest",
            "colorScheme": {
                "primary": { "500": "#aa5500" },
                "secondary": {},
                "neutral": {},
                "background": {},
                "text": {},
                "border": {}
            }
        })
    }

    #[test]
    fn minimal_document_is_valid() {
        assert!(validate_theme(&draft(minimal_valid())).is_empty());
    }

    #[test]
    fn accumulates_all_top_level_errors() {
        let errors = validate_theme(&ThemeDraft::default());
        assert_eq!(
            errors,
            vec![
                "Theme name is required".to_string(),
                "Theme slug is required".to_string(),
                "Color scheme is required".to_string(),
            ]
        );
    }

    #[test]
    fn blank_name_counts_as_missing() {
        let mut doc = minimal_valid();
        doc["name"] = json!("   ");
        let errors = validate_theme(&draft(doc));
        assert_eq!(errors, vec!["Theme name is required".to_string()]);
    }

    #[test]
    fn reports_each_missing_section() {
        let errors = validate_theme(&draft(json!({
            "name": "x",
            "slug": "x",
            "colorScheme": { "primary": { "500": "#123456" } }
        })));

        assert_eq!(errors.len(), 5);
        for section in ["secondary", "neutral", "background", "text", "border"] {
            assert!(errors.iter().any(|e| e.contains(&format!("'{section}'"))));
        }
    }

    #[test]
    fn primary_without_base_shade_is_rejected() {
        let mut doc = minimal_valid();
        doc["colorScheme"]["primary"] = json!({ "50": "#ffffff" });
        let errors = validate_theme(&draft(doc));
        assert_eq!(errors, vec!["Primary palette must define the 500 shade".to_string()]);
    }

    #[test]
    fn unparseable_base_shade_is_rejected() {
        let mut doc = minimal_valid();
        doc["colorScheme"]["primary"] = json!({ "500": "olive" });
        let errors = validate_theme(&draft(doc));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("olive"));
    }

    #[test]
    fn validation_does_not_mutate_input() {
        let input = draft(minimal_valid());
        let before = input.clone();
        let _ = validate_theme(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn slug_format_rules() {
        assert!(validate_slug_format("autumn-2024").is_ok());
        assert!(validate_slug_format("Autumn").is_err());
        assert!(validate_slug_format("-lead").is_err());
        assert!(validate_slug_format("trail-").is_err());
        assert!(validate_slug_format("double--dash").is_err());
        assert!(validate_slug_format(&"a".repeat(MAX_SLUG_LEN + 1)).is_err());
    }

    #[test]
    fn storage_validation_adds_format_and_length_errors() {
        let mut doc = minimal_valid();
        doc["slug"] = json!("Not A Slug");
        doc["name"] = json!("n".repeat(200));
        let errors = validate_for_storage(&draft(doc));

        assert!(errors.iter().any(|e| e.contains("Not A Slug")));
        assert!(errors.iter().any(|e| e.contains("'name'")));
    }
}
