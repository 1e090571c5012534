//! The invitation card - the main rendition of the question.
//!
//! One page, two states: the card with the accept button and the
//! fleeing decline button, then the celebration once accepted. The page
//! is the button's roaming container and its pointer-tracking surface;
//! it forwards mouse samples to [`FleeingButton`] through a signal.

use std::rc::Rc;

use dioxus::prelude::*;
use valentine_core::{PageState, Point};

use crate::app::Route;
use crate::components::{Celebration, FleeingButton, ParchmentFrame};
use crate::context::use_motion_prefs;

/// The invitation page.
#[component]
pub fn Invitation() -> Element {
    let mut state = use_signal(PageState::default);
    let prefs = use_motion_prefs();

    let mut container = use_signal(|| None::<Rc<MountedData>>);
    let mut pointer = use_signal(|| None::<Point>);

    let accept = move |_| {
        if state.write().accept() {
            tracing::info!("invitation accepted");
        }
    };

    rsx! {
        main {
            class: "page invitation",
            onmounted: move |event| container.set(Some(event.data())),
            onmousemove: move |event| {
                let coords = event.client_coordinates();
                pointer.set(Some(Point::new(coords.x, coords.y)));
            },

            div { class: "dot-lattice" }

            if !state().is_success() {
                div { class: "card card-enter",
                    ParchmentFrame {
                        div { class: "header-rule",
                            div { class: "rule-line" }
                            span { class: "rule-mark", "\u{2766}" }
                            div { class: "rule-line" }
                        }

                        p { class: "greeting", "Dearest Reader," }

                        p { class: "body-text",
                            "It is whispered in every drawing room that a most "
                            "distinguished suitor seeks your favor this Valentine's Day."
                        }

                        h1 { class: "proclamation", "Will You Be My Valentine?" }

                        div { class: "button-row",
                            button {
                                class: "btn-accept",
                                onclick: accept,
                                "I Burn For You"
                            }
                            if prefs().reduced {
                                button {
                                    class: "btn-decline is-still",
                                    disabled: true,
                                    "I Cannot"
                                }
                            } else {
                                FleeingButton { label: "I Cannot", pointer, container }
                            }
                        }

                        div { class: "signature",
                            p { "\u{2014} Your Devoted Author" }
                        }
                    }
                }
            } else {
                div { class: "card card-enter",
                    ParchmentFrame {
                        div { class: "success-heart pop-in", "\u{2764}" }

                        h1 {
                            class: "proclamation reveal",
                            style: "animation-delay: 0.3s;",
                            "Flawless, My Dear!"
                        }

                        p {
                            class: "body-text reveal",
                            style: "animation-delay: 0.5s;",
                            "Your author is positively delighted to announce that "
                            "you have made the most excellent choice. It is official."
                        }

                        p {
                            class: "declaration reveal",
                            style: "animation-delay: 0.7s;",
                            "You are now spoken for."
                        }

                        div {
                            class: "signature reveal",
                            style: "animation-delay: 0.9s;",
                            p { "\u{2014} Your Devoted Author" }
                        }
                    }
                }
                if !prefs().reduced {
                    Celebration {}
                }
            }

            footer { class: "variant-link-row",
                Link {
                    to: Route::Gazette {},
                    class: "variant-link",
                    "as printed in the society papers"
                }
            }
        }
    }
}
