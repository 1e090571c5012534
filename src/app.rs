use dioxus::prelude::*;

use crate::context::MotionPrefs;
use crate::pages::{Gazette, Invitation};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - the invitation card with the fleeing decline button
/// - `/gazette` - the society-paper rendition with the darting variant
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Invitation {},
    #[route("/gazette")]
    Gazette {},
}

/// Root application component.
///
/// Provides global styles, the motion-preference context, and routing.
#[component]
pub fn App() -> Element {
    let prefs = use_signal(|| MotionPrefs {
        reduced: crate::reduced_motion(),
    });
    use_context_provider(|| prefs);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
