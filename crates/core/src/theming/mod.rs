//! Theme resolution and projection engine.
//!
//! - [`schema`]: the closed theme schema (resolved and partial forms).
//! - [`defaults`]: the canonical default theme every hole is filled from.
//! - [`palette`]: 11-step tint/shade generation from one base colour.
//! - [`validation`]: structural checks on untrusted theme documents.
//! - [`resolve`]: default backfilling plus `color_at` / `gradient_at`.
//! - [`css`]: flattening a resolved theme into style variables and rules.
//! - [`portability`]: theme export/import document types.

pub mod css;
pub mod defaults;
pub mod palette;
pub mod portability;
pub mod resolve;
pub mod schema;
pub mod validation;

pub use css::{project_variables, render_stylesheet, ThemeVariables};
pub use defaults::{default_definition, default_theme_draft};
pub use palette::generate_palette;
pub use resolve::{color_at, gradient_at, resolve, ResolvedTheme};
pub use schema::{ThemeDefinition, ThemeDraft, ThemeOverrides};
pub use validation::validate_theme;
