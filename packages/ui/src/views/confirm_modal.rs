use dioxus::prelude::*;

/// A full-screen overlay asking the user to confirm an action.
/// Clicking outside the card cancels.
#[component]
pub fn ConfirmModal(
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    #[props(default = false)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal card",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                h2 { class: "modal__title", "{title}" }
                p { class: "modal__message", "{message}" }
                div {
                    class: "modal__actions",
                    button {
                        class: "button button--outline",
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "button button--danger",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy { "Deleting..." } else { "{confirm_label}" }
                    }
                }
            }
        }
    }
}
