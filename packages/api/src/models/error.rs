//! Error bodies returned by the remote API.
//!
//! Two shapes are recognised:
//!
//! ```json
//! {"error": {"message": "Entry not found"}}
//! {"error": [{"message": "title is required"}, {"message": "content is required"}]}
//! ```
//!
//! The list shape accompanies `400` validation failures, the single shape
//! every other error status.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldError {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ErrorDetail {
    Fields(Vec<FieldError>),
    Single { message: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

impl ErrorBody {
    /// Decode an error body, or `None` if it has neither shape.
    pub fn from_body(body: Option<&Value>) -> Option<Self> {
        ErrorBody::deserialize(body?).ok()
    }

    /// Field messages from a list-shaped body.
    pub fn field_messages(&self) -> Option<Vec<String>> {
        match &self.error {
            ErrorDetail::Fields(fields) => {
                Some(fields.iter().map(|f| f.message.clone()).collect())
            }
            ErrorDetail::Single { .. } => None,
        }
    }

    /// Message from a single-shaped body.
    pub fn message(&self) -> Option<&str> {
        match &self.error {
            ErrorDetail::Single { message } => Some(message),
            ErrorDetail::Fields(_) => None,
        }
    }
}
