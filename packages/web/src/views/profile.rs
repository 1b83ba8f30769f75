use api::{Notifier, Profile as ProfileData};
use dioxus::prelude::*;
use ui::controllers::profile;
use ui::push::{self, PushError};
use ui::{use_busy, use_client, use_config, use_toaster};

use super::follow;

#[component]
pub fn Profile() -> Element {
    let client = use_client();
    let config = use_config();
    let toaster = use_toaster();
    let nav = use_navigator();
    let busy = use_busy();
    let mut data = use_signal(|| Option::<ProfileData>::None);

    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        async move {
            let outcome = profile::load(&client, &toaster, || {}).await;
            if let Some(loaded) = follow(nav, outcome) {
                data.set(Some(loaded));
            }
        }
    });

    let push_config = config.push.clone();
    let on_enable_push = move |_| {
        let Some(current) = data() else {
            return;
        };
        if !busy.begin() {
            return;
        }
        let client = client.clone();
        let push_config = push_config.clone();
        spawn(async move {
            let subscription = match push::subscribe(&push_config).await {
                Ok(subscription) => subscription,
                Err(e) => {
                    tracing::warn!("Push subscription failed: {}", e);
                    toaster.error(&e.to_string());
                    (busy.release())();
                    return;
                }
            };
            let outcome =
                profile::save_subscription(&client, &toaster, &current, subscription, busy.release())
                    .await;
            if let Some(updated) = follow(nav, outcome) {
                data.set(Some(updated));
            }
        });
    };

    let Some(current) = data() else {
        return rsx! {};
    };
    let push_available = config.push.is_enabled();
    let created_on = current.created_on.clone().unwrap_or_default();
    let entries_count = current.entries_count.unwrap_or_default();
    let not_configured = PushError::NotConfigured.to_string();

    rsx! {
        section {
            class: "card profile",
            h1 { class: "profile__title", "Profile" }
            dl {
                class: "profile__details",
                dt { "Email" }
                dd { "{current.email}" }
                if !created_on.is_empty() {
                    dt { "Member since" }
                    dd { "{created_on}" }
                }
                if current.entries_count.is_some() {
                    dt { "Stories" }
                    dd { "{entries_count}" }
                }
            }
            div {
                class: "profile__push",
                h2 { "Daily reminder" }
                if current.has_push_subscription() {
                    p { "Notifications are on for this account." }
                } else if push_available {
                    p { "Get a notification when it's time to write." }
                    button {
                        class: if busy.get() { "button button--loading" } else { "button" },
                        disabled: busy.get(),
                        onclick: on_enable_push,
                        "Enable notifications"
                    }
                } else {
                    p { class: "muted", "{not_configured}" }
                }
            }
        }
    }
}
