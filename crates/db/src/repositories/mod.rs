//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod theme_repo;
pub mod theme_settings_repo;

pub use theme_repo::ThemeRepo;
pub use theme_settings_repo::ThemeSettingsRepo;
