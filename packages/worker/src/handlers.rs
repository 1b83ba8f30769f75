use js_sys::{Array, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{
    ClientQueryOptions, ClientType, Clients, NotificationEvent, NotificationOptions, PushEvent,
    ServiceWorkerGlobalScope, WindowClient,
};

use crate::{click_target, is_target, NotificationPayload};

fn scope() -> Result<ServiceWorkerGlobalScope, JsValue> {
    js_sys::global().dyn_into::<ServiceWorkerGlobalScope>()
}

/// Show the notification a push message asks for. The returned promise
/// settles once it is displayed.
#[wasm_bindgen]
pub fn handle_push(event: PushEvent) -> Result<Promise, JsValue> {
    let text = event.data().map(|data| data.text());
    let payload = NotificationPayload::from_json(text.as_deref());

    let options = NotificationOptions::new();
    options.set_body(&payload.body);
    options.set_icon(&payload.icon);
    options.set_require_interaction(true);
    if let Some(tag) = &payload.tag {
        options.set_tag(tag);
    }

    scope()?
        .registration()
        .show_notification_with_options(&payload.title, &options)
        .inspect_err(|e| web_sys::console::warn_2(&"showNotification failed".into(), e))
}

/// Close the clicked notification and focus the target page, opening it
/// when no window shows it yet.
#[wasm_bindgen]
pub fn handle_notification_click(event: NotificationEvent) -> Result<Promise, JsValue> {
    event.notification().close();
    let clients = scope()?.clients();
    let target = click_target();
    Ok(future_to_promise(focus_or_open(clients, target)))
}

async fn focus_or_open(clients: Clients, target: String) -> Result<JsValue, JsValue> {
    let options = ClientQueryOptions::new();
    options.set_type(ClientType::Window);
    let open: Array = JsFuture::from(clients.match_all_with_options(&options))
        .await?
        .dyn_into()?;

    for client in open.iter() {
        let Ok(window) = client.dyn_into::<WindowClient>() else {
            continue;
        };
        if is_target(&window.url(), &target) {
            return JsFuture::from(window.focus()?).await;
        }
    }
    JsFuture::from(clients.open_window(&target)).await
}
