//! Data models exchanged with the remote diary API.

mod auth;
mod entry;
mod error;
mod profile;

pub use auth::{AuthToken, Credentials};
pub use entry::{EntriesPage, Entry, EntryDraft, EntryId, EntryQuery, PageMeta, FAVORITES_FILTER};
pub use error::{ErrorBody, ErrorDetail, FieldError};
pub use profile::{Profile, ProfileUpdate};
