use dioxus::prelude::*;
use store::TokenStore;

use crate::Route;

/// Landing page. Signed-in visitors go straight to their stories.
#[component]
pub fn Index() -> Element {
    let client = ui::use_client();
    let nav = use_navigator();
    let signed_in = client.tokens().is_signed_in();

    use_effect(move || {
        if signed_in {
            nav.replace(Route::Stories {
                query: Default::default(),
            });
        }
    });

    rsx! {
        main {
            class: "landing",
            h1 { class: "landing__title", "My Diary" }
            p {
                class: "landing__tagline",
                "Pen down your thoughts and feelings, wherever you are."
            }
            div {
                class: "landing__actions",
                Link { class: "button", to: Route::Signup {}, "Get started" }
                Link { class: "button button--outline", to: Route::Login {}, "Login" }
            }
        }
    }
}
