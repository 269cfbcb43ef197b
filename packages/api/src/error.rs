//! # Error taxonomy
//!
//! Two error types live here, one per side of the wire:
//!
//! - [`ApiError`] (server): what a Resource API operation can fail with. Each variant
//!   maps to exactly one HTTP status, and the response body is always
//!   `{"error": "<message>"}`.
//! - [`ClientError`]: what a [`crate::ContactsClient`] call can fail with. The message is
//!   fixed per operation and never carries the server's error text.

use thiserror::Error;

#[cfg(feature = "server")]
use store::StoreError;

/// Message for a create/update body missing one of the five fields.
pub const MISSING_FIELDS: &str = "Missing required fields";
/// Message for an age that is not a number or is negative.
pub const INVALID_AGE: &str = "Age must be a valid non-negative number";
/// Message for an id with no matching row.
pub const NOT_FOUND: &str = "Contact not found";

/// Failure of a Resource API operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Client-supplied data failed a precondition (400).
    #[error("{0}")]
    Validation(String),

    /// No row matches the requested id (404).
    #[error("Contact not found")]
    NotFound,

    /// The underlying store failed (500). Carries the store's own message.
    #[error("{0}")]
    Storage(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

#[cfg(feature = "server")]
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Storage(err.to_string())
    }
}

#[cfg(feature = "server")]
mod response {
    use axum::extract::rejection::JsonRejection;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;
    use serde_json::json;

    use super::ApiError;

    impl ApiError {
        pub fn status(&self) -> StatusCode {
            match self {
                ApiError::Validation(_) => StatusCode::BAD_REQUEST,
                ApiError::NotFound => StatusCode::NOT_FOUND,
                ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
    }

    impl IntoResponse for ApiError {
        fn into_response(self) -> Response {
            let status = self.status();
            match &self {
                ApiError::Storage(message) => tracing::error!(%status, "Storage error: {}", message),
                other => tracing::warn!(%status, "Request rejected: {}", other),
            }
            (status, Json(json!({ "error": self.to_string() }))).into_response()
        }
    }

    impl From<JsonRejection> for ApiError {
        fn from(rejection: JsonRejection) -> Self {
            ApiError::Validation(rejection.body_text())
        }
    }
}

/// Failure of a Remote Client call.
///
/// Transport errors, non-success statuses and undecodable bodies all collapse into the
/// variant of the operation that was attempted.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ClientError {
    #[error("Failed to fetch contacts")]
    FetchContacts,
    #[error("Failed to fetch contact")]
    FetchContact,
    #[error("Failed to create contact")]
    CreateContact,
    #[error("Failed to update contact")]
    UpdateContact,
    #[error("Failed to delete contact")]
    DeleteContact,
}
