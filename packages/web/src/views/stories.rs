use api::EntryQuery;
use dioxus::prelude::*;
use ui::controllers::stories::{self, StoriesView};
use ui::views::{EmptyState, EntryCard};
use ui::{use_client, use_toaster, Pagination};

use super::{follow, ListQuery};
use crate::Route;

#[component]
pub fn Stories(query: ReadOnlySignal<ListQuery>) -> Element {
    let client = use_client();
    let toaster = use_toaster();
    let nav = use_navigator();
    let mut view = use_signal(|| Option::<StoriesView>::None);

    // Reload whenever the page or filter in the URL changes
    let _loader = use_resource(move || {
        let client = client.clone();
        let position = query().0;
        async move {
            let outcome = stories::reload(&client, &toaster, &position, |shown| view.set(shown)).await;
            follow(nav, outcome);
        }
    });

    let favorites = query().0.is_favorites();
    let (all_tab, favorites_tab) = if favorites {
        ("tabs__tab", "tabs__tab tabs__tab--active")
    } else {
        ("tabs__tab tabs__tab--active", "tabs__tab")
    };
    let empty_title = if favorites { "No favorite stories yet" } else { "No stories yet" };
    let open_page = move |page: u32| {
        let current = query().0;
        nav.push(Route::Stories {
            query: ListQuery(EntryQuery {
                page,
                filter: current.filter,
            }),
        });
    };

    rsx! {
        section {
            class: "stories",
            header {
                class: "stories__header",
                h1 { if favorites { "Favorite stories" } else { "My stories" } }
                div {
                    class: "tabs",
                    Link {
                        class: all_tab,
                        to: Route::Stories { query: ListQuery::default() },
                        "All"
                    }
                    Link {
                        class: favorites_tab,
                        to: Route::Stories {
                            query: ListQuery(EntryQuery::default().with_filter(api::models::FAVORITES_FILTER)),
                        },
                        "Favorites"
                    }
                }
            }
            {match view() {
                None => rsx! {},
                Some(loaded) if loaded.is_empty() => rsx! {
                    EmptyState {
                        title: empty_title,
                        on_create: move |_| {
                            nav.push(Route::NewStory {});
                        },
                    }
                },
                Some(loaded) => rsx! {
                    div {
                        class: "stories__list",
                        for entry in loaded.entries {
                            EntryCard {
                                key: "{entry.id}",
                                entry: entry.clone(),
                                on_open: move |id| {
                                    nav.push(Route::Story { id });
                                },
                            }
                        }
                    }
                    Pagination { pager: loaded.pager, on_page: open_page }
                },
            }}
        }
    }
}
