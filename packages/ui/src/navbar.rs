use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaRightFromBracket, FaXmark};
use dioxus_free_icons::Icon;

use crate::client::use_client;
use crate::controllers::{auth, Page};

/// Side menu. Collapses behind a toggle on narrow screens; the links are the
/// caller's `children`.
#[component]
pub fn Navbar(
    #[props(default = "My Diary".to_string())] title: String,
    children: Element,
) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        header {
            class: "topbar",
            button {
                class: "topbar__toggle",
                aria_label: if open() { "Close menu" } else { "Open menu" },
                onclick: move |_| open.toggle(),
                if open() {
                    Icon { icon: FaXmark, width: 18, height: 18 }
                } else {
                    Icon { icon: FaBars, width: 18, height: 18 }
                }
            }
            span { class: "topbar__title", "{title}" }
        }
        nav {
            class: if open() { "sidenav sidenav--open" } else { "sidenav" },
            // Following a link closes the menu on small screens
            onclick: move |_| open.set(false),
            {children}
        }
    }
}

/// Forget the session, then hand the landing page to `on_logout`.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: EventHandler<Page>,
) -> Element {
    let client = use_client();

    let onclick = move |_| {
        let next = auth::logout(client.tokens());
        tracing::info!("Signed out");
        on_logout.call(next);
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}
