//! The gazette's decline button: the simpler evasion variant.
//!
//! No pointer tracking and no cornering logic; a single proximity event
//! (hover or touch-start) jumps the button to a random offset inside a
//! capped box derived from the page. After the first jump the label
//! taunts the reader.

use std::rc::Rc;

use dioxus::prelude::*;
use valentine_core::{scatter, Offset, Rect};

/// A decline button that darts to a random spot whenever approached.
///
/// `container` is the page element whose bounding box stands in for the
/// viewport. Until both elements are measurable, proximity events are
/// silently skipped.
#[component]
pub fn ScatterButton(
    #[props(into)] container: ReadOnlySignal<Option<Rc<MountedData>>>,
) -> Element {
    let mut node = use_signal(|| None::<Rc<MountedData>>);
    let mut offset = use_signal(|| Offset::ZERO);
    let mut escaped = use_signal(|| false);

    let dart = move || {
        let (Some(button), Some(outer)) = (node.peek().clone(), container.peek().clone()) else {
            return;
        };
        spawn(async move {
            let (Ok(b), Ok(c)) = (button.get_client_rect().await, outer.get_client_rect().await)
            else {
                return;
            };
            let button_rect = Rect::new(b.origin.x, b.origin.y, b.size.width, b.size.height);
            let viewport = Rect::new(c.origin.x, c.origin.y, c.size.width, c.size.height);
            let next = scatter(&mut rand::rng(), viewport, button_rect);
            tracing::trace!(dx = next.dx, dy = next.dy, "darting away");
            offset.set(next);
            escaped.set(true);
        });
    };

    let transform = {
        let current = offset();
        format!(
            "transform: translate({:.1}px, {:.1}px);",
            current.dx, current.dy
        )
    };

    rsx! {
        div { class: "scatter-slot",
            button {
                class: "btn-decline",
                style: "{transform}",
                onmounted: move |event| node.set(Some(event.data())),
                onmouseenter: move |_| dart(),
                ontouchstart: move |_| dart(),
                if escaped() {
                    "You Cannot Escape!"
                } else {
                    "I Cannot"
                }
            }
        }
    }
}
