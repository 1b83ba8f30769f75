use dioxus::prelude::*;
use ui::controllers::new_story::{self, NewStoryForm};
use ui::views::FormMessage;
use ui::{use_busy, use_client, use_toaster};

use super::follow;

#[component]
pub fn NewStory() -> Element {
    let client = use_client();
    let toaster = use_toaster();
    let nav = use_navigator();
    let busy = use_busy();
    let mut form = use_signal(NewStoryForm::default);
    let mut error = use_signal(|| Option::<String>::None);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if !busy.begin() {
            return;
        }
        error.set(None);
        let client = client.clone();
        spawn(async move {
            let submitted = form();
            match new_story::create(&client, &toaster, &submitted, busy.release()).await {
                Ok(outcome) => {
                    follow(nav, outcome);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        form {
            class: "card form new-story",
            onsubmit: onsubmit,
            h1 { class: "form__title", "New story" }
            input {
                class: "form__input",
                placeholder: "Title",
                value: form().title,
                onfocus: move |_| error.set(None),
                oninput: move |evt| form.write().title = evt.value(),
            }
            textarea {
                class: "form__input new-story__content",
                placeholder: "What's on your mind today?",
                rows: "14",
                value: form().content,
                onfocus: move |_| error.set(None),
                oninput: move |evt| form.write().content = evt.value(),
            }
            FormMessage { message: error() }
            button {
                class: if busy.get() { "button button--loading" } else { "button" },
                r#type: "submit",
                disabled: busy.get(),
                "Save story"
            }
        }
    }
}
