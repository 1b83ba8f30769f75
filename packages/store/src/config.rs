//! # Client configuration: `diary.toml`
//!
//! Defines the TOML document the web app embeds at build time to find the
//! remote API and the push-notification settings.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://my-diary-api.herokuapp.com/api/v1"
//!
//! [push]
//! vapid_public_key = "BEl6...url-safe-base64..."
//! click_target = "/new-story"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`DiaryConfig`] | Top-level config with TOML (de)serialisation and builder helpers. |
//! | [`ApiConfig`] | Origin and prefix of the remote REST API. |
//! | [`PushConfig`] | VAPID public key used to subscribe, and the page opened on notification click. |
//!
//! Every field has a default, so a missing or partial file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

/// Remote API used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://my-diary-api.herokuapp.com/api/v1";

/// Top-level configuration stored in `diary.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiaryConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub push: PushConfig,
}

/// Remote API configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to. No trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Push notification configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PushConfig {
    /// Application server (VAPID) public key, URL-safe base64.
    /// Empty disables push subscription.
    #[serde(default)]
    pub vapid_public_key: String,
    /// Page focused or opened when a notification is clicked.
    #[serde(default = "default_click_target")]
    pub click_target: String,
}

fn default_click_target() -> String {
    "/new-story".to_string()
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            vapid_public_key: String::new(),
            click_target: default_click_target(),
        }
    }
}

impl PushConfig {
    pub fn is_enabled(&self) -> bool {
        !self.vapid_public_key.trim().is_empty()
    }
}

impl DiaryConfig {
    /// Create a config pointing at the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Builder method to set the API base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url: String = base_url.into();
        self.api.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Builder method to set the VAPID public key.
    pub fn with_vapid_key(mut self, key: impl Into<String>) -> Self {
        self.push.vapid_public_key = key.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "diary.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(s)?;
        let base_url = config.api.base_url.clone();
        Ok(config.with_base_url(base_url))
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = DiaryConfig::from_toml("").unwrap();
        assert_eq!(config, DiaryConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.push.click_target, "/new-story");
        assert!(!config.push.is_enabled());
    }

    #[test]
    fn test_partial_file() {
        let config = DiaryConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:3000/api/v1/"

            [push]
            vapid_public_key = "BKey"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000/api/v1");
        assert!(config.push.is_enabled());
        assert_eq!(config.push.click_target, "/new-story");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = DiaryConfig::new("https://diary.example/api").with_vapid_key("BKey");
        let text = config.to_toml().unwrap();
        assert_eq!(DiaryConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(DiaryConfig::from_toml("[api\nbase_url = 1").is_err());
    }
}
