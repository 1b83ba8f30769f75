//! # Endpoint catalogue
//!
//! Every call the client makes, as a [`Call`]: method, path relative to the
//! API base, optional JSON body, and the one status code that counts as
//! success for that call. Page controllers pass a `Call` to
//! [`ApiClient::request`](crate::ApiClient::request) and compare the received
//! status with [`Call::expects`]; anything else goes to the classifier.
//!
//! | Function | Request | Expected |
//! |----------|---------|----------|
//! | [`signup`] | `POST /auth/signup` | 201 |
//! | [`login`] | `POST /auth/login` | 200 |
//! | [`list_entries`] | `GET /entries{?page,filter}` | 200 |
//! | [`get_entry`] | `GET /entries/{id}` | 200 |
//! | [`update_entry`] | `PUT /entries/{id}` | 200 |
//! | [`delete_entry`] | `DELETE /entries/{id}` | 204 |
//! | [`create_entry`] | `POST /entries` | 201 |
//! | [`get_profile`] | `GET /profile` | 200 |
//! | [`update_profile`] | `PUT /profile` | 204 |

use serde::Serialize;
use serde_json::Value;

use crate::models::{Credentials, EntryDraft, EntryId, EntryQuery, ProfileUpdate};
use crate::query;
use crate::transport::Method;

/// One API call and its expected success status.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub expected: u16,
}

impl Call {
    pub fn new(method: Method, path: impl Into<String>, expected: u16) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            expected,
        }
    }

    pub fn with_body<B: Serialize>(mut self, body: &B) -> Self {
        // Serializing plain derive structs cannot fail
        self.body = serde_json::to_value(body).ok();
        self
    }

    /// Whether `status` is the success status for this call.
    pub fn expects(&self, status: u16) -> bool {
        status == self.expected
    }
}

pub fn signup(credentials: &Credentials) -> Call {
    Call::new(Method::Post, "/auth/signup", 201).with_body(credentials)
}

pub fn login(credentials: &Credentials) -> Call {
    Call::new(Method::Post, "/auth/login", 200).with_body(credentials)
}

pub fn list_entries(position: &EntryQuery) -> Call {
    let path = format!("/entries{}", query::format(&position.to_query()));
    Call::new(Method::Get, path, 200)
}

pub fn get_entry(id: EntryId) -> Call {
    Call::new(Method::Get, format!("/entries/{id}"), 200)
}

pub fn update_entry(id: EntryId, draft: &EntryDraft) -> Call {
    Call::new(Method::Put, format!("/entries/{id}"), 200).with_body(draft)
}

pub fn delete_entry(id: EntryId) -> Call {
    Call::new(Method::Delete, format!("/entries/{id}"), 204)
}

pub fn create_entry(draft: &EntryDraft) -> Call {
    Call::new(Method::Post, "/entries", 201).with_body(draft)
}

pub fn get_profile() -> Call {
    Call::new(Method::Get, "/profile", 200)
}

pub fn update_profile(update: &ProfileUpdate) -> Call {
    Call::new(Method::Put, "/profile", 204).with_body(update)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_auth_calls() {
        let creds = Credentials::new(" a@b.com ", "x");
        let call = login(&creds);
        assert_eq!(call.method, Method::Post);
        assert_eq!(call.path, "/auth/login");
        assert_eq!(call.body, Some(json!({"email": "a@b.com", "password": "x"})));
        assert!(call.expects(200));
        assert!(!call.expects(201));

        assert!(signup(&creds).expects(201));
    }

    #[test]
    fn test_list_entries_path() {
        assert_eq!(list_entries(&EntryQuery::default()).path, "/entries?page=1");
        let favs = EntryQuery::page(2).with_filter("favorites");
        assert_eq!(list_entries(&favs).path, "/entries?filter=favorites&page=2");
    }

    #[test]
    fn test_entry_calls() {
        assert_eq!(get_entry(7).path, "/entries/7");
        let del = delete_entry(7);
        assert_eq!(del.method, Method::Delete);
        assert!(del.expects(204));
        assert!(del.body.is_none());

        let put = update_entry(7, &EntryDraft::new("t", "c"));
        assert_eq!(put.method, Method::Put);
        assert!(put.expects(200));

        assert!(create_entry(&EntryDraft::new("t", "c")).expects(201));
    }

    #[test]
    fn test_profile_calls() {
        assert!(get_profile().expects(200));
        let call = update_profile(&ProfileUpdate {
            push_sub: Some(json!({"endpoint": "https://push.example/abc"})),
        });
        assert!(call.expects(204));
        assert_eq!(
            call.body,
            Some(json!({"push_sub": {"endpoint": "https://push.example/abc"}}))
        );
    }
}
