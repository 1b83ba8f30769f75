use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The signed-in user's profile, from `GET /profile`.
///
/// Only `email` is required; the API may add fields freely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub email: String,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub entries_count: Option<u64>,
    #[serde(default)]
    pub push_sub: Option<Value>,
}

impl Profile {
    /// Decode a profile response, bare or wrapped as `{"profile": {...}}`.
    pub fn from_body(body: &Value) -> Result<Self, serde_json::Error> {
        let inner = body.get("profile").unwrap_or(body);
        Profile::deserialize(inner)
    }

    pub fn has_push_subscription(&self) -> bool {
        self.push_sub.as_ref().is_some_and(|v| !v.is_null())
    }
}

/// Body of `PUT /profile`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    /// Browser push subscription, serialized as the browser reports it.
    pub push_sub: Option<Value>,
}
