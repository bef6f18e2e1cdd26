//! Conifer Accessibility
//!
//! The accessibility primitives shared by every Conifer widget:
//! - ARIA attribute vocabulary and tri-state values
//! - focus tracking and trigger-return restoration
//! - inert isolation for overlay sessions
//! - generated label-id allocation

pub mod aria;
pub mod focus;
pub mod isolation;

pub use aria::{attr, is_true, AriaRole, IdAllocator, TriState};
pub use focus::FocusTracker;
pub use isolation::FocusIsolation;
