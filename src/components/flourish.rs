//! Decorative parchment frame with ink-drawn corner flourishes.

use dioxus::prelude::*;

/// An ink-drawn corner ornament: a curling vine with trailing dots.
///
/// Positioned and mirrored into its corner by the `frame-corner--*`
/// classes.
#[component]
pub fn CornerFlourish(#[props(default)] class: String) -> Element {
    rsx! {
        svg {
            view_box: "0 0 100 100",
            class: "frame-corner {class}",
            fill: "currentColor",
            path {
                d: "M0,0 Q30,0 50,20 Q70,40 70,70 Q40,70 20,50 Q0,30 0,0 \
                    M10,10 Q20,10 30,20 Q40,30 40,40 Q30,40 20,30 Q10,20 10,10",
            }
            circle { cx: "60", cy: "15", r: "4" }
            circle { cx: "75", cy: "25", r: "3" }
            circle { cx: "85", cy: "40", r: "2" }
        }
    }
}

/// Nested decorative borders with a flourish in each corner, framing
/// the card content like a hand-set pamphlet.
#[component]
pub fn ParchmentFrame(children: Element) -> Element {
    rsx! {
        div { class: "parchment-frame",
            div { class: "frame-border frame-border--outer" }
            div { class: "frame-border frame-border--mid" }
            div { class: "frame-border frame-border--inner" }

            CornerFlourish { class: "frame-corner--tl" }
            CornerFlourish { class: "frame-corner--tr" }
            CornerFlourish { class: "frame-corner--bl" }
            CornerFlourish { class: "frame-corner--br" }

            div { class: "frame-content", {children} }
        }
    }
}
