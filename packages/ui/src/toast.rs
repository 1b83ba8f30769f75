//! Toast context and rendering.

use api::{Notifier, Toast, ToastKind, ToastStack};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleExclamation, FaSpinner, FaXmark};
use dioxus_free_icons::Icon;

/// How long an error-only container stays up before it dismisses itself.
pub const ERROR_TOAST_SECS: u64 = 5;

/// Reactive [`ToastStack`] handed to controllers as their [`Notifier`].
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster(pub Signal<ToastStack>);

impl Notifier for Toaster {
    fn show(&self, toasts: Vec<Toast>) {
        let mut stack = self.0;
        stack.write().show(toasts);
    }

    fn destroy(&self) {
        let mut stack = self.0;
        stack.write().destroy();
    }
}

impl Toaster {
    pub fn dismiss(&self, id: u64) {
        let mut stack = self.0;
        stack.write().dismiss(id);
    }
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

/// Provides the toast stack and renders it above `children`.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let stack = use_signal(ToastStack::new);
    use_context_provider(|| Toaster(stack));

    rsx! {
        {children}
        ToastHost {}
    }
}

#[component]
fn ToastHost() -> Element {
    let toaster = use_toaster();
    let container = toaster.0.read().container().cloned();

    // Error-only containers go away on their own; progress toasts wait for
    // the request that raised them.
    use_effect(move || {
        let Some(container) = toaster.0.read().container().cloned() else {
            return;
        };
        if container.is_error_only() {
            spawn(async move {
                sleep_secs(ERROR_TOAST_SECS).await;
                toaster.dismiss(container.id);
            });
        }
    });

    let Some(container) = container else {
        return rsx! {};
    };
    let id = container.id;

    rsx! {
        div {
            class: "toast-container",
            role: "status",
            for (i, toast) in container.toasts.into_iter().enumerate() {
                div {
                    key: "{id}-{i}",
                    class: toast_class(toast.kind),
                    if toast.kind == ToastKind::Progress {
                        span { class: "toast__icon spin", Icon { icon: FaSpinner, width: 14, height: 14 } }
                    } else {
                        span { class: "toast__icon", Icon { icon: FaCircleExclamation, width: 14, height: 14 } }
                    }
                    span { class: "toast__message", "{toast.message}" }
                }
            }
            button {
                class: "toast__close",
                aria_label: "Dismiss",
                onclick: move |_| toaster.dismiss(id),
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Progress => "toast toast--progress",
        ToastKind::Error => "toast toast--error",
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_secs(secs: u64) {
    gloo_timers::future::sleep(std::time::Duration::from_secs(secs)).await;
}

// Native builds only render for tests and previews; toasts stay until
// replaced or closed.
#[cfg(not(target_arch = "wasm32"))]
async fn sleep_secs(_secs: u64) {
    std::future::pending::<()>().await;
}
