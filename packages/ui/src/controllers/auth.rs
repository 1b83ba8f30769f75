//! Signup, login and logout.

use api::endpoints;
use api::models::{AuthToken, Credentials};
use api::{ApiClient, EntryQuery, Notifier, Transport};
use store::TokenStore;

use super::{decode, run, FormError, Indicator, Outcome, Page};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub repassword: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<Credentials, FormError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(FormError::MissingCredentials);
        }
        if self.password != self.repassword {
            return Err(FormError::PasswordMismatch);
        }
        Ok(Credentials::new(&self.email, &self.password))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, FormError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(FormError::MissingCredentials);
        }
        Ok(Credentials::new(&self.email, &self.password))
    }
}

/// Create an account. On `201` the returned token is stored and the story
/// list opens.
pub async fn signup<T, S, N>(
    client: &ApiClient<T, S>,
    notifier: &N,
    form: &SignupForm,
    release: impl FnOnce(),
) -> Result<Outcome<()>, FormError>
where
    T: Transport,
    S: TokenStore,
    N: Notifier,
{
    let credentials = match form.validate() {
        Ok(c) => c,
        Err(e) => {
            release();
            return Err(e);
        }
    };
    let call = endpoints::signup(&credentials);
    let outcome = run(client, notifier, &call, Indicator::Control, release, |body| {
        let auth: AuthToken = decode(body)?;
        client.tokens().set(&auth.token);
        Ok(())
    })
    .await;
    if outcome == Outcome::Done(()) {
        tracing::info!("Signed up as {}", credentials.email);
    }
    Ok(outcome.then_go(Page::Stories(EntryQuery::default())))
}

/// Sign in. On `200` the returned token is stored and the story list opens.
pub async fn login<T, S, N>(
    client: &ApiClient<T, S>,
    notifier: &N,
    form: &LoginForm,
    release: impl FnOnce(),
) -> Result<Outcome<()>, FormError>
where
    T: Transport,
    S: TokenStore,
    N: Notifier,
{
    let credentials = match form.validate() {
        Ok(c) => c,
        Err(e) => {
            release();
            return Err(e);
        }
    };
    let call = endpoints::login(&credentials);
    let outcome = run(client, notifier, &call, Indicator::Control, release, |body| {
        let auth: AuthToken = decode(body)?;
        client.tokens().set(&auth.token);
        Ok(())
    })
    .await;
    Ok(outcome.then_go(Page::Stories(EntryQuery::default())))
}

/// Forget the session and return to the landing page.
pub fn logout<S: TokenStore + ?Sized>(tokens: &S) -> Page {
    tokens.clear();
    Page::Index
}
