use dioxus::prelude::*;

/// Inline message under a form, for input rejected before submitting.
#[component]
pub fn FormMessage(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            p { class: "form-error", role: "alert", "{message}" }
        },
        None => rsx! {},
    }
}
