//! Signup and login forms.

use dioxus::prelude::*;
use ui::controllers::auth::{self, LoginForm, SignupForm};
use ui::views::FormMessage;
use ui::{use_busy, use_client, use_toaster};

use super::follow;
use crate::Route;

#[component]
pub fn Signup() -> Element {
    let client = use_client();
    let toaster = use_toaster();
    let nav = use_navigator();
    let busy = use_busy();
    let mut form = use_signal(SignupForm::default);
    let mut error = use_signal(|| Option::<String>::None);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if !busy.begin() {
            return;
        }
        error.set(None);
        let client = client.clone();
        spawn(async move {
            let submitted = form();
            match auth::signup(&client, &toaster, &submitted, busy.release()).await {
                Ok(outcome) => {
                    follow(nav, outcome);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        main {
            class: "auth",
            form {
                class: "card form",
                onsubmit: onsubmit,
                h1 { class: "form__title", "Create an account" }
                label { class: "form__label", r#for: "signup-email", "Email" }
                input {
                    id: "signup-email",
                    class: "form__input",
                    r#type: "email",
                    required: true,
                    value: form().email,
                    onfocus: move |_| error.set(None),
                    oninput: move |evt| form.write().email = evt.value(),
                }
                label { class: "form__label", r#for: "signup-password", "Password" }
                input {
                    id: "signup-password",
                    class: "form__input",
                    r#type: "password",
                    required: true,
                    value: form().password,
                    onfocus: move |_| error.set(None),
                    oninput: move |evt| form.write().password = evt.value(),
                }
                label { class: "form__label", r#for: "signup-repassword", "Confirm password" }
                input {
                    id: "signup-repassword",
                    class: "form__input",
                    r#type: "password",
                    required: true,
                    value: form().repassword,
                    onfocus: move |_| error.set(None),
                    oninput: move |evt| form.write().repassword = evt.value(),
                }
                FormMessage { message: error() }
                button {
                    class: if busy.get() { "button button--loading" } else { "button" },
                    r#type: "submit",
                    disabled: busy.get(),
                    "Signup"
                }
                p {
                    class: "form__switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Login" }
                }
            }
        }
    }
}

#[component]
pub fn Login() -> Element {
    let client = use_client();
    let toaster = use_toaster();
    let nav = use_navigator();
    let busy = use_busy();
    let mut form = use_signal(LoginForm::default);
    let mut error = use_signal(|| Option::<String>::None);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if !busy.begin() {
            return;
        }
        error.set(None);
        let client = client.clone();
        spawn(async move {
            let submitted = form();
            match auth::login(&client, &toaster, &submitted, busy.release()).await {
                Ok(outcome) => {
                    follow(nav, outcome);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        main {
            class: "auth",
            form {
                class: "card form",
                onsubmit: onsubmit,
                h1 { class: "form__title", "Welcome back" }
                label { class: "form__label", r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    class: "form__input",
                    r#type: "email",
                    required: true,
                    value: form().email,
                    onfocus: move |_| error.set(None),
                    oninput: move |evt| form.write().email = evt.value(),
                }
                label { class: "form__label", r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    class: "form__input",
                    r#type: "password",
                    required: true,
                    value: form().password,
                    onfocus: move |_| error.set(None),
                    oninput: move |evt| form.write().password = evt.value(),
                }
                FormMessage { message: error() }
                button {
                    class: if busy.get() { "button button--loading" } else { "button" },
                    r#type: "submit",
                    disabled: busy.get(),
                    "Login"
                }
                p {
                    class: "form__switch",
                    "New here? "
                    Link { to: Route::Signup {}, "Create an account" }
                }
            }
        }
    }
}
