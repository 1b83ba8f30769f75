use api::EntryQuery;
use dioxus::prelude::*;
use ui::{LogoutButton, Navbar};

use super::{use_session_guard, ListQuery};
use crate::Route;

/// Shell for the signed-in pages: side menu plus the active page.
#[component]
pub fn AppLayout() -> Element {
    let nav = use_navigator();
    if !use_session_guard() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "app",
            Navbar {
                Link {
                    class: "sidenav__link",
                    to: Route::Stories { query: ListQuery::default() },
                    "My stories"
                }
                Link {
                    class: "sidenav__link",
                    to: Route::Stories { query: ListQuery(EntryQuery::default().with_filter(api::models::FAVORITES_FILTER)) },
                    "Favorites"
                }
                Link { class: "sidenav__link", to: Route::NewStory {}, "New story" }
                Link { class: "sidenav__link", to: Route::Profile {}, "Profile" }
                LogoutButton {
                    class: "sidenav__link sidenav__logout",
                    on_logout: move |page| {
                        nav.replace(Route::from(page));
                    },
                }
            }
            main {
                class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
