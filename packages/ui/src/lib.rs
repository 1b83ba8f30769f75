//! This crate contains all shared UI for the diary web app.
//!
//! Page logic lives in [`controllers`] as plain async functions over an
//! [`api::ApiClient`] and an [`api::Notifier`]; the components here and the
//! route views in the `web` crate only bind them to signals and markup.

pub mod controllers;
pub mod pagination;
pub mod push;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod busy;
pub use busy::{use_busy, Busy};

mod client;
pub use client::{make_client, use_client, use_config, ClientProvider, DiaryClient, PlatformStore};

mod navbar;
pub use navbar::{LogoutButton, Navbar};

mod toast;
pub use toast::{use_toaster, ToastProvider, Toaster};

pub use pagination::{Pager, Pagination};
