//! Celebration overlay: hearts and petals drifting across the screen.
//!
//! Drift parameters are sampled once when the overlay mounts; the CSS
//! keyframes in the theme do the actual motion. The overlay is fixed,
//! non-interactive, and purely decorative.

use dioxus::prelude::*;
use rand::Rng;

use crate::theme::colors;

/// How many elements the overlay spawns.
const ELEMENT_COUNT: usize = 30;
/// Per-element launch stagger, in seconds.
const STAGGER_SECS: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq)]
enum FloatKind {
    Heart,
    Petal,
}

/// One element's sampled drift parameters.
#[derive(Debug, Clone, PartialEq)]
struct FloatSpec {
    id: usize,
    kind: FloatKind,
    left_vw: f64,
    delay_secs: f64,
    duration_secs: f64,
    size_px: f64,
}

impl FloatSpec {
    fn sample(id: usize, rng: &mut impl Rng) -> Self {
        let kind = if rng.random_bool(0.5) {
            FloatKind::Heart
        } else {
            FloatKind::Petal
        };
        let size_px = match kind {
            FloatKind::Heart => rng.random_range(16.0..32.0),
            FloatKind::Petal => rng.random_range(12.0..24.0),
        };
        Self {
            id,
            kind,
            left_vw: rng.random_range(0.0..100.0),
            delay_secs: id as f64 * STAGGER_SECS,
            duration_secs: rng.random_range(3.0..7.0),
            size_px,
        }
    }
}

/// Full-screen celebratory overlay.
///
/// With `rising` set, the elements float upward and loop (the gazette's
/// rendition); otherwise they fall once and fade.
#[component]
pub fn Celebration(#[props(default = false)] rising: bool) -> Element {
    let specs = use_signal(|| {
        let mut rng = rand::rng();
        (0..ELEMENT_COUNT)
            .map(|id| FloatSpec::sample(id, &mut rng))
            .collect::<Vec<_>>()
    });

    let motion = if rising { "float--rise" } else { "float--fall" };

    rsx! {
        div { class: "celebration-overlay",
            for spec in specs() {
                FloatingElement { key: "{spec.id}", spec: spec.clone(), motion }
            }
        }
    }
}

#[component]
fn FloatingElement(spec: FloatSpec, motion: &'static str) -> Element {
    let drift = format!(
        "left: {:.1}vw; animation-duration: {:.2}s; animation-delay: {:.2}s;",
        spec.left_vw, spec.duration_secs, spec.delay_secs
    );

    match spec.kind {
        FloatKind::Heart => {
            let size = format!("font-size: {:.0}px; color: {};", spec.size_px, colors::ROSE_DEEP);
            rsx! {
                span {
                    class: "float-el float-heart {motion}",
                    style: "{drift} {size}",
                    "\u{2665}"
                }
            }
        }
        FloatKind::Petal => {
            let shape = format!(
                "width: {:.0}px; height: {:.0}px; background: {};",
                spec.size_px,
                spec.size_px * 0.6,
                colors::WISTERIA_LIGHT,
            );
            rsx! {
                span {
                    class: "float-el float-petal {motion}",
                    style: "{drift} {shape}",
                }
            }
        }
    }
}
