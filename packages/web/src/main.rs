use dioxus::prelude::*;

use api::EntryId;
use store::DiaryConfig;
use ui::controllers::Page;
use ui::{ClientProvider, ToastProvider};
use views::{AppLayout, Index, ListQuery, Login, NewStory, Profile, Signup, Stories, Story};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Index {},
    #[route("/signup")]
    Signup {},
    #[route("/login")]
    Login {},
    #[layout(AppLayout)]
        #[route("/stories?:..query")]
        Stories { query: ListQuery },
        #[route("/stories/:id")]
        Story { id: EntryId },
        #[route("/new-story")]
        NewStory {},
        #[route("/profile")]
        Profile {},
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Index => Route::Index {},
            Page::Login => Route::Login {},
            Page::Signup => Route::Signup {},
            Page::Stories(query) => Route::Stories {
                query: ListQuery(query),
            },
            Page::Story(id) => Route::Story { id },
            Page::NewStory => Route::NewStory {},
            Page::Profile => Route::Profile {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Configuration embedded at build time.
const DIARY_TOML: &str = include_str!("../diary.toml");

fn load_config() -> DiaryConfig {
    let config = DiaryConfig::from_toml(DIARY_TOML).unwrap_or_else(|e| {
        tracing::error!("Invalid {}: {}", DiaryConfig::filename(), e);
        DiaryConfig::default()
    });
    with_build_overrides(
        config,
        option_env!("DIARY_API_BASE_URL"),
        option_env!("DIARY_VAPID_PUBLIC_KEY"),
    )
}

/// Apply the non-blank build environment overrides.
fn with_build_overrides(
    mut config: DiaryConfig,
    base_url: Option<&str>,
    vapid_key: Option<&str>,
) -> DiaryConfig {
    if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
        config = config.with_base_url(url);
    }
    if let Some(key) = vapid_key.map(str::trim).filter(|k| !k.is_empty()) {
        config = config.with_vapid_key(key);
    }
    config
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: "/img/favicon.png" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ClientProvider {
            config,
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::EntryQuery;

    #[test]
    fn test_embedded_config_parses() {
        assert!(DiaryConfig::from_toml(DIARY_TOML).is_ok());
    }

    #[test]
    fn test_build_overrides() {
        let base = DiaryConfig::from_toml(DIARY_TOML).unwrap();
        assert!(!base.push.is_enabled());

        let config = with_build_overrides(
            base.clone(),
            Some(" https://localhost:3000/api/v1 "),
            Some("BEl62iUYgUivxIkv69yViEuiBIa"),
        );
        assert_eq!(config.api.base_url, "https://localhost:3000/api/v1");
        assert_eq!(config.push.vapid_public_key, "BEl62iUYgUivxIkv69yViEuiBIa");
        assert!(config.push.is_enabled());

        let unchanged = with_build_overrides(base.clone(), Some(""), Some("  "));
        assert_eq!(unchanged, base);
    }

    #[test]
    fn test_page_routes() {
        assert_eq!(Route::from(Page::NewStory).to_string(), "/new-story");
        assert_eq!(Route::from(Page::Story(7)).to_string(), "/stories/7");
        assert_eq!(Route::from(Page::Login), Route::Login {});
    }

    #[test]
    fn test_stories_route_parses_query() {
        let route: Route = "/stories?page=3&filter=favorites".parse().unwrap();
        assert_eq!(
            route,
            Route::Stories {
                query: ListQuery(EntryQuery::page(3).with_filter("favorites"))
            }
        );
    }
}
