//! Push message payload.

use serde::Deserialize;

pub const DEFAULT_TITLE: &str = "What's on your mind today?";
pub const DEFAULT_BODY: &str = "Time to update your diary";
pub const DEFAULT_ICON: &str = "/img/favicon.png";

/// What a push message asks the worker to display.
///
/// Senders may post `{"title", "body", "tag"}`; anything missing, blank or
/// unreadable falls back to the daily reminder text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotificationPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub icon: String,
}

impl Default for NotificationPayload {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            body: DEFAULT_BODY.to_string(),
            tag: None,
            icon: DEFAULT_ICON.to_string(),
        }
    }
}

impl NotificationPayload {
    /// Decode the message text. Returns the default reminder for an empty
    /// message or one that is not a JSON object.
    pub fn from_json(data: Option<&str>) -> Self {
        let Some(data) = data.map(str::trim).filter(|d| !d.is_empty()) else {
            return Self::default();
        };
        match serde_json::from_str::<Self>(data) {
            Ok(payload) => payload.with_fallbacks(),
            Err(_) => Self::default(),
        }
    }

    fn with_fallbacks(mut self) -> Self {
        let defaults = Self::default();
        if self.title.trim().is_empty() {
            self.title = defaults.title;
        }
        if self.body.trim().is_empty() {
            self.body = defaults.body;
        }
        if self.icon.trim().is_empty() {
            self.icon = defaults.icon;
        }
        self.tag = self.tag.filter(|t| !t.trim().is_empty());
        self
    }
}
