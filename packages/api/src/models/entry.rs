//! # Diary entries
//!
//! | Type | Used by |
//! |------|---------|
//! | [`Entry`] | `GET /entries/{id}`, items of [`EntriesPage`] |
//! | [`EntriesPage`] | `GET /entries{?page,filter}` |
//! | [`EntryDraft`] | body of `POST /entries` and `PUT /entries/{id}` |
//! | [`EntryQuery`] | the `page`/`filter` pair carried in the story list URL |
//!
//! Entries belong to the remote API; the client only holds them for as long as
//! the current view shows them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::query::Query;

pub type EntryId = i64;

/// Value of the `filter` parameter that restricts the list to favorites.
pub const FAVORITES_FILTER: &str = "favorites";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_on: String,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Entry {
    /// Decode a single-entry response. The entry may arrive bare or wrapped
    /// as `{"entry": {...}}`.
    pub fn from_body(body: &Value) -> Result<Self, serde_json::Error> {
        let inner = body.get("entry").unwrap_or(body);
        Entry::deserialize(inner)
    }

    /// First `len` characters of the content, for list cards.
    pub fn excerpt(&self, len: usize) -> String {
        let mut chars = self.content.chars();
        let head: String = chars.by_ref().take(len).collect();
        if chars.next().is_some() {
            format!("{}...", head.trim_end())
        } else {
            head
        }
    }
}

/// Pagination metadata returned alongside a page of entries.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageMeta {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub limit: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EntriesPage {
    #[serde(default)]
    pub entries: Vec<Entry>,
    #[serde(default)]
    pub meta: PageMeta,
}

/// Fields sent when creating or updating an entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

impl EntryDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            is_favorite: None,
        }
    }

    /// Draft that rewrites `entry` as-is, with `is_favorite` set.
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            title: entry.title.clone(),
            content: entry.content.clone(),
            is_favorite: Some(entry.is_favorite),
        }
    }
}

/// The story list's position: 1-based page number and optional filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryQuery {
    pub page: u32,
    pub filter: Option<String>,
}

impl Default for EntryQuery {
    fn default() -> Self {
        Self {
            page: 1,
            filter: None,
        }
    }
}

impl EntryQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page: page.max(1),
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        let filter: String = filter.into();
        self.filter = (!filter.is_empty()).then_some(filter);
        self
    }

    /// Read `page` and `filter` out of a parsed query. Anything unparseable
    /// falls back to the first page, unfiltered.
    pub fn from_query(query: &Query) -> Self {
        let page = query
            .get("page")
            .and_then(|p| p.parse::<u32>().ok())
            .unwrap_or(1);
        let filter = query.get("filter").cloned().unwrap_or_default();
        Self::page(page).with_filter(filter)
    }

    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.insert("page".to_string(), self.page.to_string());
        if let Some(filter) = &self.filter {
            query.insert("filter".to_string(), filter.clone());
        }
        query
    }

    pub fn is_favorites(&self) -> bool {
        self.filter.as_deref() == Some(FAVORITES_FILTER)
    }
}
