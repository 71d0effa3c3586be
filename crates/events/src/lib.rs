//! Live theme propagation.
//!
//! - [`document`]: the single style variable namespace surfaces read.
//! - [`propagation`]: the controller that writes it on mount and switch.
//! - [`bus`]: broadcast of theme lifecycle events.

pub mod bus;
pub mod document;
pub mod propagation;

pub use bus::{ThemeChange, ThemeEvent, ThemeEventBus};
pub use document::{AppliedStyles, StyleDocument};
pub use propagation::{PropagationController, PropagationError, PropagationState, SwitchOutcome};
