//! # Service worker for diary reminders
//!
//! Shows a notification for every push message and, when one is clicked,
//! brings the new-story page to the front.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`payload`] | Decodes the push message, with fixed fallbacks |
//! | [`target`] | Decides whether an open window already shows the click target |
//! | `handlers` | `push` / `notificationclick` entry points (wasm only) |
//!
//! The JavaScript shim at `/sw.js` registers the event listeners during the
//! worker's first evaluation and forwards each event to the exported
//! handlers once the module has loaded.

pub mod payload;
pub mod target;

#[cfg(target_arch = "wasm32")]
mod handlers;
#[cfg(target_arch = "wasm32")]
pub use handlers::{handle_notification_click, handle_push};

pub use payload::NotificationPayload;
pub use target::is_target;

use store::DiaryConfig;

/// Same configuration the web app embeds.
const DIARY_TOML: &str = include_str!("../../web/diary.toml");

/// Page opened when a notification is clicked.
pub fn click_target() -> String {
    DiaryConfig::from_toml(DIARY_TOML)
        .unwrap_or_default()
        .push
        .click_target
}
