use api::EntryId;
use dioxus::prelude::*;
use ui::controllers::story::{self, StoryState};
use ui::icons::{FaPen, FaStar, FaTrashCan};
use ui::views::{ConfirmModal, FormMessage};
use ui::{use_busy, use_client, use_toaster, Icon};

use super::follow;

#[component]
pub fn Story(id: ReadOnlySignal<EntryId>) -> Element {
    let client = use_client();
    let toaster = use_toaster();
    let nav = use_navigator();
    let saving = use_busy();
    let favoriting = use_busy();
    let deleting = use_busy();
    let mut state = use_signal(|| StoryState::new(id()));
    let mut error = use_signal(|| Option::<String>::None);

    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        let id = id();
        async move {
            state.set(StoryState::new(id));
            let outcome = story::load(&client, &toaster, id, || {}).await;
            if let Some(entry) = follow(nav, outcome) {
                state.write().loaded(entry);
            }
        }
    });

    let save_client = client.clone();
    let on_save = move |_| {
        let Some(entry) = state.read().entry.clone() else {
            return;
        };
        if !saving.begin() {
            return;
        }
        error.set(None);
        let client = save_client.clone();
        let draft = state.read().draft.clone();
        spawn(async move {
            match story::save(&client, &toaster, &entry, &draft, saving.release()).await {
                Ok(outcome) => {
                    if let Some(saved) = follow(nav, outcome) {
                        state.write().loaded(saved);
                    }
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let favorite_client = client.clone();
    let on_favorite = move |_| {
        let Some(entry) = state.read().entry.clone() else {
            return;
        };
        if !favoriting.begin() {
            return;
        }
        let client = favorite_client.clone();
        spawn(async move {
            let outcome = story::toggle_favorite(&client, &toaster, &entry, favoriting.release()).await;
            if let Some(updated) = follow(nav, outcome) {
                state.write().entry = Some(updated);
            }
        });
    };

    let delete_client = client.clone();
    let on_delete = move |_| {
        if !deleting.begin() {
            return;
        }
        let client = delete_client.clone();
        let id = state.read().id;
        spawn(async move {
            let outcome = story::delete(&client, &toaster, id, deleting.release()).await;
            state.write().confirm_delete = false;
            follow(nav, outcome);
        });
    };

    let current = state();
    let Some(entry) = current.entry.clone() else {
        return rsx! {};
    };
    let favorite_class = if current.is_favorite() {
        "icon-button icon-button--active"
    } else {
        "icon-button"
    };

    rsx! {
        article {
            class: "card story",
            header {
                class: "story__header",
                if current.edit_mode {
                    input {
                        class: "form__input story__title-input",
                        value: current.draft.title.clone(),
                        onfocus: move |_| error.set(None),
                        oninput: move |evt| state.write().draft.title = evt.value(),
                    }
                } else {
                    h1 { class: "story__title", "{entry.title}" }
                }
                div {
                    class: "story__actions",
                    button {
                        class: favorite_class,
                        title: "Favorite",
                        disabled: favoriting.get(),
                        onclick: on_favorite,
                        Icon { icon: FaStar, width: 16, height: 16 }
                    }
                    if !current.edit_mode {
                        button {
                            class: "icon-button",
                            title: "Edit",
                            onclick: move |_| state.write().begin_edit(),
                            Icon { icon: FaPen, width: 16, height: 16 }
                        }
                    }
                    button {
                        class: "icon-button icon-button--danger",
                        title: "Delete",
                        onclick: move |_| state.write().confirm_delete = true,
                        Icon { icon: FaTrashCan, width: 16, height: 16 }
                    }
                }
            }
            if !entry.created_on.is_empty() {
                time { class: "story__date", "{entry.created_on}" }
            }
            if current.edit_mode {
                textarea {
                    class: "form__input story__content-input",
                    rows: "12",
                    value: current.draft.content.clone(),
                    onfocus: move |_| error.set(None),
                    oninput: move |evt| state.write().draft.content = evt.value(),
                }
                FormMessage { message: error() }
                div {
                    class: "story__edit-actions",
                    button {
                        class: "button button--outline",
                        disabled: saving.get(),
                        onclick: move |_| {
                            error.set(None);
                            state.write().cancel_edit();
                        },
                        "Cancel"
                    }
                    button {
                        class: if saving.get() { "button button--loading" } else { "button" },
                        disabled: saving.get(),
                        onclick: on_save,
                        "Save"
                    }
                }
            } else {
                div { class: "story__content", "{entry.content}" }
            }
        }

        if current.confirm_delete {
            ConfirmModal {
                title: "Delete story",
                message: "This story will be gone for good. Delete it?",
                busy: deleting.get(),
                on_confirm: on_delete,
                on_cancel: move |_| state.write().confirm_delete = false,
            }
        }
    }
}
