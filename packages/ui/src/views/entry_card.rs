use api::{Entry, EntryId};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaStar;
use dioxus_free_icons::Icon;

const EXCERPT_CHARS: usize = 140;

/// One story in the list: title, date, and the start of its content.
#[component]
pub fn EntryCard(entry: Entry, on_open: EventHandler<EntryId>) -> Element {
    let id = entry.id;
    let excerpt = entry.excerpt(EXCERPT_CHARS);

    rsx! {
        article {
            class: "card entry-card",
            onclick: move |_| on_open.call(id),
            header {
                class: "entry-card__header",
                h3 { class: "entry-card__title", "{entry.title}" }
                if entry.is_favorite {
                    span {
                        class: "entry-card__favorite",
                        title: "Favorite",
                        Icon { icon: FaStar, width: 14, height: 14 }
                    }
                }
            }
            if !entry.created_on.is_empty() {
                time { class: "entry-card__date", "{entry.created_on}" }
            }
            p { class: "entry-card__excerpt", "{excerpt}" }
        }
    }
}
