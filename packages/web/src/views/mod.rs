use std::fmt;

use api::EntryQuery;
use dioxus::prelude::*;
use store::TokenStore;
use ui::controllers::Outcome;

use crate::Route;

mod index;
pub use index::Index;

mod auth;
pub use auth::{Login, Signup};

mod layout;
pub use layout::AppLayout;

mod stories;
pub use stories::Stories;

mod story;
pub use story::Story;

mod new_story;
pub use new_story::NewStory;

mod profile;
pub use profile::Profile;

/// Story list position as carried in the `/stories` query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery(pub EntryQuery);

impl From<&str> for ListQuery {
    fn from(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        ListQuery(EntryQuery::from_query(&api::query::parse(&format!("?{query}"))))
    }
}

impl fmt::Display for ListQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query = api::query::format(&self.0.to_query());
        f.write_str(query.trim_start_matches('?'))
    }
}

/// Follow a controller's navigation, if it asked for one. Returns the
/// result of a successful run.
pub(crate) fn follow<R>(nav: Navigator, outcome: Outcome<R>) -> Option<R> {
    match outcome {
        Outcome::Done(result) => Some(result),
        Outcome::Go(page) => {
            nav.push(Route::from(page));
            None
        }
        Outcome::Failed => None,
    }
}

/// Send signed-out visitors to the login page.
pub(crate) fn use_session_guard() -> bool {
    let client = ui::use_client();
    let nav = use_navigator();
    let signed_in = client.tokens().is_signed_in();
    use_effect(move || {
        if !signed_in {
            nav.replace(Route::Login {});
        }
    });
    signed_in
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_from_url() {
        let query = ListQuery::from("page=2&filter=favorites");
        assert_eq!(query.0, EntryQuery::page(2).with_filter("favorites"));
        assert!(query.0.is_favorites());
    }

    #[test]
    fn test_list_query_garbage_is_first_page() {
        assert_eq!(ListQuery::from("").0, EntryQuery::default());
        assert_eq!(ListQuery::from("page=abc").0, EntryQuery::default());
    }

    #[test]
    fn test_list_query_display() {
        let query = ListQuery(EntryQuery::page(3));
        assert_eq!(query.to_string(), "page=3");
        assert_eq!(ListQuery::from(query.to_string().as_str()), query);
    }
}
