//! The society-paper rendition of the question.
//!
//! A broadsheet-styled card with the simpler darting decline button.
//! On acceptance, a portrait is revealed after a short fixed delay; the
//! pending reveal is cancelled if the page unmounts first.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use valentine_core::PageState;

use crate::app::Route;
use crate::components::{Celebration, ScatterButton};
use crate::context::use_motion_prefs;

/// Fixed delay before the portrait appears in the success state.
const PORTRAIT_DELAY: Duration = Duration::from_millis(500);

/// The gazette page.
#[component]
pub fn Gazette() -> Element {
    let mut state = use_signal(PageState::default);
    let prefs = use_motion_prefs();

    let mut container = use_signal(|| None::<Rc<MountedData>>);
    let mut show_portrait = use_signal(|| false);
    let mut reveal_task = use_signal(|| None::<Task>);

    let accept = move |_| {
        if state.write().accept() {
            tracing::info!("invitation accepted from the gazette");
        }
    };

    // Fire-once portrait reveal on entering the success state.
    use_effect(move || {
        if state().is_success() && !*show_portrait.peek() && reveal_task.peek().is_none() {
            if prefs.peek().reduced {
                show_portrait.set(true);
            } else {
                let task = spawn(async move {
                    tokio::time::sleep(PORTRAIT_DELAY).await;
                    show_portrait.set(true);
                });
                reveal_task.set(Some(task));
            }
        }
    });

    // Never act on an unmounted page.
    use_drop(move || {
        if let Some(task) = *reveal_task.peek() {
            task.cancel();
        }
    });

    rsx! {
        main {
            class: "page gazette",
            onmounted: move |event| container.set(Some(event.data())),

            div { class: "society-paper card-enter",
                span { class: "paper-corner paper-corner--tl", "\u{2767}" }
                span { class: "paper-corner paper-corner--tr", "\u{2767}" }
                span { class: "paper-corner paper-corner--bl", "\u{2767}" }
                span { class: "paper-corner paper-corner--br", "\u{2767}" }

                header { class: "masthead",
                    h1 { "The Society Papers" }
                    p { class: "masthead-sub", "Valentine's Day Edition \u{2014} London" }
                }

                if !state().is_success() {
                    p { class: "greeting", "A Most Ardent Inquiry" }

                    p { class: "body-text",
                        "This paper has it on excellent authority that one reader "
                        "in particular is the object of a most sincere devotion. "
                        "The question is hereby put to print:"
                    }

                    h2 { class: "proclamation", "Will You Be My Valentine?" }

                    div { class: "button-row",
                        button {
                            class: "btn-accept",
                            onclick: accept,
                            "I Accept With Pleasure"
                        }
                        if prefs().reduced {
                            button {
                                class: "btn-decline is-still",
                                disabled: true,
                                "I Cannot"
                            }
                        } else {
                            ScatterButton { container }
                        }
                    }
                } else {
                    p { class: "greeting", "Notice To The Ton" }

                    h2 {
                        class: "proclamation reveal",
                        style: "animation-delay: 0.2s;",
                        "The Match Is Made!"
                    }

                    p {
                        class: "body-text reveal",
                        style: "animation-delay: 0.4s;",
                        "Let it be known across every ballroom in the city: the "
                        "invitation has been accepted, and the season's finest "
                        "pairing is hereby announced."
                    }

                    if show_portrait() {
                        div { class: "portrait portrait-enter", "\u{2764}" }
                    }
                }

                footer { class: "signature",
                    p { "\u{2014} Your Devoted Author" }
                }
            }

            if state().is_success() && !prefs().reduced {
                Celebration { rising: true }
            }

            footer { class: "variant-link-row",
                Link {
                    to: Route::Invitation {},
                    class: "variant-link",
                    "return to the invitation"
                }
            }
        }
    }
}
