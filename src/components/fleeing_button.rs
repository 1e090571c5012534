//! The decline button that will not be caught.
//!
//! Owns one [`EvasionController`] and feeds it pointer samples supplied
//! by the page, plus its own touch events. On each qualifying sample it
//! measures the live bounding rects (layout can shift, so nothing is
//! cached), runs the controller, and writes the emitted offset into a
//! CSS transform. The spring-like `--spring` transition in the theme
//! does the interpolation; the controller never animates anything.

use std::rc::Rc;

use dioxus::prelude::*;
use valentine_core::{EvasionController, Offset, Point, Rect};

/// The fleeing decline button.
///
/// `pointer` is the latest mouse sample from the page's tracking
/// surface; `container` is the mounted element the button is allowed to
/// roam within. Until both the button and the container are mounted and
/// measurable, every sample is silently skipped.
#[component]
pub fn FleeingButton(
    label: String,
    #[props(into)] pointer: ReadOnlySignal<Option<Point>>,
    #[props(into)] container: ReadOnlySignal<Option<Rc<MountedData>>>,
) -> Element {
    let mut node = use_signal(|| None::<Rc<MountedData>>);
    let controller = use_signal(EvasionController::new);
    let mut offset = use_signal(|| Offset::ZERO);
    // Rect reads are async; skip samples that arrive while one is in
    // flight so a fast pointer cannot pile up tasks.
    let mut in_flight = use_signal(|| false);

    let evade = move |sample: Point| {
        if *in_flight.peek() {
            return;
        }
        let (Some(button), Some(outer)) = (node.peek().clone(), container.peek().clone()) else {
            return;
        };
        in_flight.set(true);
        let mut controller = controller;
        spawn(async move {
            let rects = (button.get_client_rect().await, outer.get_client_rect().await);
            if let (Ok(b), Ok(c)) = rects {
                let button_rect = Rect::new(b.origin.x, b.origin.y, b.size.width, b.size.height);
                let container_rect = Rect::new(c.origin.x, c.origin.y, c.size.width, c.size.height);
                let outcome = controller.write().evade(
                    &mut rand::rng(),
                    sample,
                    button_rect,
                    container_rect,
                );
                if let Some(next) = outcome.offset() {
                    offset.set(next);
                }
            }
            in_flight.set(false);
        });
    };

    // Every new pointer sample is one controller step.
    use_effect(move || {
        if let Some(sample) = pointer() {
            evade(sample);
        }
    });

    let touch = move |event: Event<TouchData>| {
        if let Some(point) = event.touches().first() {
            let coords = point.client_coordinates();
            evade(Point::new(coords.x, coords.y));
        }
    };

    let transform = {
        let current = offset();
        format!(
            "transform: translate({:.1}px, {:.1}px);",
            current.dx, current.dy
        )
    };

    rsx! {
        button {
            class: "btn-decline",
            style: "{transform}",
            onmounted: move |event| node.set(Some(event.data())),
            ontouchstart: touch,
            ontouchmove: touch,
            "{label}"
        }
    }
}
