//! Row models and DTOs.

pub mod theme;
pub mod theme_settings;
