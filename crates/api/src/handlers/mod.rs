pub mod live_theme;
pub mod theme_portability;
pub mod theme_settings;
pub mod theme_tools;
pub mod themes;
