//! Single story: view, edit, favorite, delete.

use api::endpoints;
use api::{ApiClient, Entry, EntryDraft, EntryId, EntryQuery, Notifier, Transport};
use serde_json::Value;
use store::TokenStore;

use super::{run, FormError, Indicator, Outcome, Page};

/// Everything the story page tracks between events.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryState {
    pub id: EntryId,
    pub entry: Option<Entry>,
    pub edit_mode: bool,
    pub confirm_delete: bool,
    /// Title and content being edited.
    pub draft: EntryDraft,
}

impl StoryState {
    pub fn new(id: EntryId) -> Self {
        Self {
            id,
            entry: None,
            edit_mode: false,
            confirm_delete: false,
            draft: EntryDraft::default(),
        }
    }

    pub fn is_favorite(&self) -> bool {
        self.entry.as_ref().is_some_and(|e| e.is_favorite)
    }

    /// Show `entry`, leaving edit mode.
    pub fn loaded(&mut self, entry: Entry) {
        self.draft = EntryDraft::new(entry.title.clone(), entry.content.clone());
        self.entry = Some(entry);
        self.edit_mode = false;
    }

    pub fn begin_edit(&mut self) {
        if let Some(entry) = &self.entry {
            self.draft = EntryDraft::new(entry.title.clone(), entry.content.clone());
            self.edit_mode = true;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit_mode = false;
        if let Some(entry) = &self.entry {
            self.draft = EntryDraft::new(entry.title.clone(), entry.content.clone());
        }
    }
}

/// Decode an updated entry. Servers that answer a `PUT` without echoing the
/// entry get `fallback` instead.
fn updated_entry(body: Option<Value>, fallback: Entry) -> Result<Entry, serde_json::Error> {
    match body {
        Some(body) if !body.is_null() => Entry::from_body(&body),
        _ => Ok(fallback),
    }
}

pub async fn load<T, S, N>(
    client: &ApiClient<T, S>,
    notifier: &N,
    id: EntryId,
    release: impl FnOnce(),
) -> Outcome<Entry>
where
    T: Transport,
    S: TokenStore,
    N: Notifier,
{
    let call = endpoints::get_entry(id);
    run(client, notifier, &call, Indicator::Toast, release, |body| {
        Entry::from_body(&body.unwrap_or(Value::Null))
    })
    .await
}

/// Save the edited title and content of `entry`. A blank title or content
/// is rejected without a request.
pub async fn save<T, S, N>(
    client: &ApiClient<T, S>,
    notifier: &N,
    entry: &Entry,
    draft: &EntryDraft,
    release: impl FnOnce(),
) -> Result<Outcome<Entry>, FormError>
where
    T: Transport,
    S: TokenStore,
    N: Notifier,
{
    if draft.title.trim().is_empty() || draft.content.trim().is_empty() {
        release();
        return Err(FormError::EmptyStory);
    }
    let draft = EntryDraft {
        title: draft.title.trim().to_string(),
        content: draft.content.clone(),
        is_favorite: Some(entry.is_favorite),
    };
    let fallback = Entry {
        title: draft.title.clone(),
        content: draft.content.clone(),
        ..entry.clone()
    };
    let call = endpoints::update_entry(entry.id, &draft);
    let outcome = run(client, notifier, &call, Indicator::Control, release, |body| {
        updated_entry(body, fallback)
    })
    .await;
    Ok(outcome)
}

/// Flip the favorite flag of `entry`.
pub async fn toggle_favorite<T, S, N>(
    client: &ApiClient<T, S>,
    notifier: &N,
    entry: &Entry,
    release: impl FnOnce(),
) -> Outcome<Entry>
where
    T: Transport,
    S: TokenStore,
    N: Notifier,
{
    let fallback = Entry {
        is_favorite: !entry.is_favorite,
        ..entry.clone()
    };
    let call = endpoints::update_entry(entry.id, &EntryDraft::from_entry(&fallback));
    run(client, notifier, &call, Indicator::Control, release, |body| {
        updated_entry(body, fallback)
    })
    .await
}

/// Delete the entry, then return to the story list.
pub async fn delete<T, S, N>(
    client: &ApiClient<T, S>,
    notifier: &N,
    id: EntryId,
    release: impl FnOnce(),
) -> Outcome<()>
where
    T: Transport,
    S: TokenStore,
    N: Notifier,
{
    let call = endpoints::delete_entry(id);
    run(client, notifier, &call, Indicator::Control, release, |_| Ok(()))
        .await
        .then_go(Page::Stories(EntryQuery::default()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::test_support::*;
    use super::*;
    use api::Method;

    fn entry() -> Entry {
        Entry {
            id: 5,
            title: "Monday".into(),
            content: "Rainy".into(),
            created_on: "2018-07-02".into(),
            is_favorite: false,
        }
    }

    #[test]
    fn test_state_edit_cycle() {
        let mut state = StoryState::new(5);
        state.begin_edit();
        assert!(!state.edit_mode, "nothing to edit before load");

        state.loaded(entry());
        state.begin_edit();
        assert!(state.edit_mode);
        state.draft.title = "Changed".into();
        state.cancel_edit();
        assert!(!state.edit_mode);
        assert_eq!(state.draft.title, "Monday");
        assert!(!state.is_favorite());
    }

    #[tokio::test]
    async fn test_load_wrapped_entry() {
        let client = signed_in_client();
        client.transport().respond(
            200,
            json!({"entry": {"id": 5, "title": "Monday", "content": "Rainy", "created_on": "2018-07-02", "is_favorite": false}}),
        );
        let toasts = toasts();
        let releases = Releases::default();

        let loaded = load(&client, &toasts, 5, releases.release()).await;

        assert_eq!(loaded, Outcome::Done(entry()));
        assert!(toasts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_load_missing_entry() {
        let client = signed_in_client();
        client
            .transport()
            .respond(404, json!({"error": {"message": "Entry not found"}}));
        let toasts = toasts();
        let releases = Releases::default();

        let loaded = load(&client, &toasts, 99, releases.release()).await;

        assert_eq!(loaded, Outcome::Failed);
        assert_eq!(
            toasts.borrow().container().unwrap().toasts[0].message,
            "Entry not found"
        );
    }

    #[tokio::test]
    async fn test_save_sends_draft() {
        let client = signed_in_client();
        client.transport().respond(
            200,
            json!({"id": 5, "title": "Tuesday", "content": "Sunny", "created_on": "2018-07-02", "is_favorite": false}),
        );
        let toasts = toasts();
        let releases = Releases::default();

        let saved = save(
            &client,
            &toasts,
            &entry(),
            &EntryDraft::new("  Tuesday ", "Sunny"),
            releases.release(),
        )
        .await
        .unwrap()
        .done()
        .unwrap();

        assert_eq!(saved.title, "Tuesday");
        let sent = client.transport().requests();
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(sent[0].url, "https://diary.example/api/v1/entries/5");
        assert_eq!(
            client.transport().request_body(0),
            Some(json!({"title": "Tuesday", "content": "Sunny", "is_favorite": false}))
        );
        assert_eq!(releases.count(), 1);
    }

    #[tokio::test]
    async fn test_save_blank_draft_is_rejected_locally() {
        let client = signed_in_client();
        let toasts = toasts();
        let releases = Releases::default();

        let result = save(
            &client,
            &toasts,
            &entry(),
            &EntryDraft::new("  ", ""),
            releases.release(),
        )
        .await;

        assert_eq!(result, Err(FormError::EmptyStory));
        assert_eq!(client.transport().request_count(), 0);
        assert_eq!(releases.count(), 1);
    }

    #[tokio::test]
    async fn test_toggle_favorite_without_echo() {
        let client = signed_in_client();
        client.transport().respond_empty(200);
        let toasts = toasts();
        let releases = Releases::default();

        let toggled = toggle_favorite(&client, &toasts, &entry(), releases.release())
            .await
            .done()
            .unwrap();

        assert!(toggled.is_favorite);
        assert_eq!(
            client.transport().request_body(0).unwrap()["is_favorite"],
            json!(true)
        );
    }

    #[tokio::test]
    async fn test_delete_returns_to_list() {
        let client = signed_in_client();
        client.transport().respond_empty(204);
        let toasts = toasts();
        let releases = Releases::default();

        let outcome = delete(&client, &toasts, 5, releases.release()).await;

        assert_eq!(outcome, Outcome::Go(Page::Stories(EntryQuery::default())));
        assert_eq!(client.transport().requests()[0].method, Method::Delete);
        assert_eq!(releases.count(), 1);
    }

    #[tokio::test]
    async fn test_delete_unexpected_200_is_an_error() {
        let client = signed_in_client();
        client
            .transport()
            .respond(200, json!({"error": {"message": "Use 204"}}));
        let toasts = toasts();
        let releases = Releases::default();

        let outcome = delete(&client, &toasts, 5, releases.release()).await;

        assert_eq!(outcome, Outcome::Failed);
        assert!(!toasts.borrow().is_empty());
    }
}
