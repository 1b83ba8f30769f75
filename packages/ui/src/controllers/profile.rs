//! Profile page and push subscription.

use api::endpoints;
use api::models::ProfileUpdate;
use api::{ApiClient, Notifier, Profile, Transport};
use serde_json::Value;
use store::TokenStore;

use super::{run, Indicator, Outcome};

pub async fn load<T, S, N>(
    client: &ApiClient<T, S>,
    notifier: &N,
    release: impl FnOnce(),
) -> Outcome<Profile>
where
    T: Transport,
    S: TokenStore,
    N: Notifier,
{
    let call = endpoints::get_profile();
    run(client, notifier, &call, Indicator::Toast, release, |body| {
        Profile::from_body(&body.unwrap_or(Value::Null))
    })
    .await
}

/// Store a browser push subscription on the profile.
///
/// Returns the profile as it now stands, so the page can show notifications
/// as enabled without reloading.
pub async fn save_subscription<T, S, N>(
    client: &ApiClient<T, S>,
    notifier: &N,
    profile: &Profile,
    subscription: Value,
    release: impl FnOnce(),
) -> Outcome<Profile>
where
    T: Transport,
    S: TokenStore,
    N: Notifier,
{
    let update = ProfileUpdate {
        push_sub: Some(subscription),
    };
    let call = endpoints::update_profile(&update);
    run(client, notifier, &call, Indicator::Control, release, |_| {
        Ok(Profile {
            push_sub: update.push_sub.clone(),
            ..profile.clone()
        })
    })
    .await
}
