//! Motion preference context.
//!
//! Carries the user's reduce-motion choice (taken from the command
//! line) to every component. When reduced, the decline button stands
//! still and the celebration overlays are suppressed; the accept path
//! is never gated on it.

use dioxus::prelude::*;

/// Motion preferences shared through context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionPrefs {
    /// Skip the fleeing button and decorative animation.
    pub reduced: bool,
}

/// Hook to read the motion preferences provided at the app root.
pub fn use_motion_prefs() -> Signal<MotionPrefs> {
    use_context::<Signal<MotionPrefs>>()
}
