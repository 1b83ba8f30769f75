//! Story list.

use api::endpoints;
use api::{ApiClient, EntriesPage, Entry, EntryQuery, Notifier, Transport};
use store::TokenStore;

use super::{decode, run, Indicator, Outcome};
use crate::pagination::Pager;

/// One loaded page of the story list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoriesView {
    pub query: EntryQuery,
    pub entries: Vec<Entry>,
    pub pager: Pager,
}

impl StoriesView {
    /// Nothing to list: the view shows the empty-state card instead.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fetch the page of entries `query` points at.
pub async fn load<T, S, N>(
    client: &ApiClient<T, S>,
    notifier: &N,
    query: &EntryQuery,
    release: impl FnOnce(),
) -> Outcome<StoriesView>
where
    T: Transport,
    S: TokenStore,
    N: Notifier,
{
    let call = endpoints::list_entries(query);
    run(client, notifier, &call, Indicator::Toast, release, |body| {
        let page: EntriesPage = decode(body)?;
        Ok(StoriesView {
            query: query.clone(),
            pager: Pager::from_meta(page.meta),
            entries: page.entries,
        })
    })
    .await
}

/// Clear the shown list through `show`, then load `query` and show it.
/// A failed load leaves the list cleared.
pub async fn reload<T, S, N>(
    client: &ApiClient<T, S>,
    notifier: &N,
    query: &EntryQuery,
    mut show: impl FnMut(Option<StoriesView>),
) -> Outcome<()>
where
    T: Transport,
    S: TokenStore,
    N: Notifier,
{
    show(None);
    match load(client, notifier, query, || {}).await {
        Outcome::Done(view) => {
            show(Some(view));
            Outcome::Done(())
        }
        Outcome::Go(page) => Outcome::Go(page),
        Outcome::Failed => Outcome::Failed,
    }
}
