//! Vitrine domain core.
//!
//! Pure logic shared by the persistence, propagation and HTTP crates:
//! the theme schema and its defaults, palette generation, validation,
//! resolution against defaults and projection into style variables.
//! Nothing in this crate performs I/O.

pub mod error;
pub mod theming;
pub mod types;
