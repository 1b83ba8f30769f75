use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaFeather;
use dioxus_free_icons::Icon;

/// Empty state shown when the story list has nothing to show.
#[component]
pub fn EmptyState(
    #[props(default = "No stories yet".to_string())] title: String,
    on_create: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "card empty-state",
            Icon { icon: FaFeather, width: 28, height: 28 }
            h2 { class: "empty-state__title", "{title}" }
            p { class: "empty-state__text", "Write down what happened today." }
            button {
                class: "button",
                onclick: move |_| on_create.call(()),
                "Write a story"
            }
        }
    }
}
