//! Colour palette generation.
//!
//! Derives an 11-step [`ColorScale`] from a single base colour: steps below
//! 500 are tints toward white, 500 is the base itself, and steps above 500
//! are shades toward black capped at 80% darkening.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;
use crate::theming::schema::{ColorScale, SCALE_STEPS};

/// Strict hex colour pattern: optional `#`, exactly six hex digits.
pub const HEX_COLOR_PATTERN: &str = r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$";

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEX_COLOR_PATTERN).expect("valid regex"));

/// The step that holds the unmodified base colour.
pub const BASE_STEP: u16 = 500;

/// Maximum fraction of a channel removed when shading toward black.
const MAX_DARKEN: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("'{0}' is not a valid hex color (expected #rrggbb)")]
    InvalidHex(String),
}

impl From<PaletteError> for CoreError {
    fn from(err: PaletteError) -> Self {
        CoreError::Validation(err.to_string())
    }
}

/// Parse a strict 6-digit hex colour into its RGB channels.
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8), PaletteError> {
    let caps = HEX_COLOR_RE
        .captures(hex)
        .ok_or_else(|| PaletteError::InvalidHex(hex.to_string()))?;

    let channel = |i: usize| {
        u8::from_str_radix(&caps[i], 16).map_err(|_| PaletteError::InvalidHex(hex.to_string()))
    };
    Ok((channel(1)?, channel(2)?, channel(3)?))
}

/// Format RGB channels as lowercase `#rrggbb`.
pub fn rgb_to_hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Generate the full palette for `base`.
///
/// Fails on anything that is not a strict 6-digit hex colour; no partial
/// palette is ever produced.
pub fn generate_palette(base: &str) -> Result<ColorScale, PaletteError> {
    let rgb = hex_to_rgb(base)?;
    let values = SCALE_STEPS.map(|step| step_color(base, rgb, step));
    Ok(ColorScale::from_steps(values))
}

fn step_color(base: &str, (r, g, b): (u8, u8, u8), step: u16) -> String {
    if step == BASE_STEP {
        return base.to_string();
    }

    let (target, factor) = if step < BASE_STEP {
        (255, 1.0 - f64::from(step) / f64::from(BASE_STEP))
    } else {
        (0, f64::from(step - BASE_STEP) / 450.0 * MAX_DARKEN)
    };

    rgb_to_hex((
        lerp(r, target, factor),
        lerp(g, target, factor),
        lerp(b, target, factor),
    ))
}

/// Linear interpolation between two channel values, rounded half away
/// from zero.
fn lerp(from: u8, to: u8, factor: f64) -> u8 {
    let from = f64::from(from);
    let value = from + (f64::from(to) - from) * factor;
    value.round().clamp(0.0, 255.0) as u8
}

/// Euclidean distance between two colours in RGB space.
pub fn rgb_distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> f64 {
    let d = |x: u8, y: u8| (f64::from(x) - f64::from(y)).powi(2);
    (d(a.0, b.0) + d(a.1, b.1) + d(a.2, b.2)).sqrt()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
