use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Yes/no question guarding a destructive action.
///
/// While `busy` both buttons are disabled and the backdrop does not dismiss,
/// so the action cannot be confirmed twice.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default = "Working...".to_string())] busy_label: String,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| {
                if !busy {
                    on_cancel.call(());
                }
            },
            div {
                class: "modal-body",
                h2 { class: "modal-title", "{title}" }
                p { class: "modal-message", "{message}" }
                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy { "{busy_label}" } else { "{confirm_label}" }
                    }
                }
            }
        }
    }
}
