//! Browser push subscription for the profile page.
//!
//! Registers the service worker, subscribes through its push manager with
//! the configured VAPID key, and hands back the subscription as JSON ready
//! for `PUT /profile`.

use serde_json::Value;
use store::config::PushConfig;

/// Script registered as the service worker. Served from the site root so its
/// scope covers every page.
pub const SERVICE_WORKER_URL: &str = "/sw.js";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PushError {
    #[error("Push notifications are not supported by this browser")]
    Unsupported,
    #[error("Push notifications are not configured")]
    NotConfigured,
    #[error("invalid VAPID public key: {0}")]
    InvalidKey(String),
    #[error("{0}")]
    Browser(String),
    #[error("unreadable push subscription: {0}")]
    Subscription(String),
}

/// Subscribe this browser to push notifications.
#[cfg(target_arch = "wasm32")]
pub async fn subscribe(config: &PushConfig) -> Result<Value, PushError> {
    use js_sys::{Object, Reflect, Uint8Array, JSON};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    if !config.is_enabled() {
        return Err(PushError::NotConfigured);
    }
    let key = api::push::application_server_key(&config.vapid_public_key)
        .map_err(|e| PushError::InvalidKey(e.to_string()))?;

    let window = web_sys::window().ok_or(PushError::Unsupported)?;
    let navigator = window.navigator();
    if !Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false) {
        return Err(PushError::Unsupported);
    }
    let container = navigator.service_worker();

    JsFuture::from(container.register(SERVICE_WORKER_URL))
        .await
        .map_err(browser_error)?;
    let registration: web_sys::ServiceWorkerRegistration =
        JsFuture::from(container.ready().map_err(browser_error)?)
            .await
            .map_err(browser_error)?
            .unchecked_into();
    let push_manager = registration.push_manager().map_err(|_| PushError::Unsupported)?;

    let options = Object::new();
    Reflect::set(&options, &"userVisibleOnly".into(), &JsValue::TRUE).map_err(browser_error)?;
    Reflect::set(
        &options,
        &"applicationServerKey".into(),
        &Uint8Array::from(key.as_slice()).into(),
    )
    .map_err(browser_error)?;
    let options: web_sys::PushSubscriptionOptionsInit = options.unchecked_into();

    let subscription = JsFuture::from(
        push_manager
            .subscribe_with_options(&options)
            .map_err(browser_error)?,
    )
    .await
    .map_err(browser_error)?;

    let text: String = JSON::stringify(&subscription)
        .map_err(browser_error)?
        .into();
    let value =
        serde_json::from_str(&text).map_err(|e| PushError::Subscription(e.to_string()))?;
    tracing::info!("Subscribed to push notifications");
    Ok(value)
}

#[cfg(target_arch = "wasm32")]
fn browser_error(err: wasm_bindgen::JsValue) -> PushError {
    PushError::Browser(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn subscribe(config: &PushConfig) -> Result<Value, PushError> {
    if !config.is_enabled() {
        return Err(PushError::NotConfigured);
    }
    api::push::application_server_key(&config.vapid_public_key)
        .map_err(|e| PushError::InvalidKey(e.to_string()))?;
    Err(PushError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured() {
        let config = PushConfig::default();
        assert_eq!(subscribe(&config).await, Err(PushError::NotConfigured));
    }

    #[tokio::test]
    async fn test_bad_key_is_reported_before_browser_checks() {
        let config = PushConfig {
            vapid_public_key: "not base64!".into(),
            ..PushConfig::default()
        };
        assert!(matches!(subscribe(&config).await, Err(PushError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn test_native_is_unsupported() {
        let config = PushConfig {
            vapid_public_key: "BEl6".into(),
            ..PushConfig::default()
        };
        assert_eq!(subscribe(&config).await, Err(PushError::Unsupported));
    }
}
