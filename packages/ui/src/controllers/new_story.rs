use api::endpoints;
use api::{ApiClient, EntryDraft, EntryQuery, Notifier, Transport};
use store::TokenStore;

use super::{run, FormError, Indicator, Outcome, Page};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewStoryForm {
    pub title: String,
    pub content: String,
}

impl NewStoryForm {
    pub fn validate(&self) -> Result<EntryDraft, FormError> {
        let title = self.title.trim();
        if title.is_empty() || self.content.trim().is_empty() {
            return Err(FormError::EmptyStory);
        }
        Ok(EntryDraft::new(title, self.content.clone()))
    }
}

/// Create the entry, then open the story list on its first page.
pub async fn create<T, S, N>(
    client: &ApiClient<T, S>,
    notifier: &N,
    form: &NewStoryForm,
    release: impl FnOnce(),
) -> Result<Outcome<()>, FormError>
where
    T: Transport,
    S: TokenStore,
    N: Notifier,
{
    let draft = match form.validate() {
        Ok(d) => d,
        Err(e) => {
            release();
            return Err(e);
        }
    };
    let call = endpoints::create_entry(&draft);
    let outcome = run(client, notifier, &call, Indicator::Control, release, |_| Ok(())).await;
    Ok(outcome.then_go(Page::Stories(EntryQuery::default())))
}
