//! Error types for backend communication.
//!
//! - [`ApiError`] - structured error payload returned by the backend
//! - [`ApiErrorKind`] - classification of the backend's known `detail` strings
//! - [`ClientError`] - transport and serialization failures raised before a
//!   payload could be read

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `detail` strings the backend uses as its error taxonomy.
pub mod details {
    pub const INVALID_CREDENTIALS: &str = "invalid username or password";
    pub const AUTH_REQUIRED: &str = "authorization required";
    pub const SESSION_EXPIRED: &str = "session expired";
    pub const SESSION_NOT_FOUND: &str = "session not found";
    pub const DIR_NOT_FOUND: &str = "directory not found";
}

/// Error payload of an `{"status": "error"}` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Classification of an [`ApiError`] by its `detail`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiErrorKind {
    InvalidCredentials,
    /// No session; handled by redirecting, never displayed.
    AuthRequired,
    /// Session existed but lapsed; redirect plus a visible message.
    SessionExpired,
    SessionNotFound,
    DirectoryNotFound,
    Other,
}

impl ApiError {
    pub fn new(title: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            title: title.into(),
            detail,
        }
    }

    /// Generic shape every transport or decoding failure collapses to.
    pub fn unknown() -> Self {
        Self::new("Unknown error", Some("An unknown error occurred".to_string()))
    }

    pub fn kind(&self) -> ApiErrorKind {
        match self.detail.as_deref() {
            Some(details::INVALID_CREDENTIALS) => ApiErrorKind::InvalidCredentials,
            Some(details::AUTH_REQUIRED) => ApiErrorKind::AuthRequired,
            Some(details::SESSION_EXPIRED) => ApiErrorKind::SessionExpired,
            Some(details::SESSION_NOT_FOUND) => ApiErrorKind::SessionNotFound,
            Some(details::DIR_NOT_FOUND) => ApiErrorKind::DirectoryNotFound,
            _ => ApiErrorKind::Other,
        }
    }

    /// Text shown to the user: the detail when present, otherwise the title.
    pub fn message(&self) -> &str {
        match self.detail.as_deref() {
            Some(detail) if !detail.is_empty() => detail,
            _ => &self.title,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.detail.as_deref() {
            Some(detail) if !detail.is_empty() => write!(f, "{}: {}", self.title, detail),
            _ => write!(f, "{}", self.title),
        }
    }
}

impl std::error::Error for ApiError {}

/// Failure to complete a request or read its payload.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("failed to build request: {0}")]
    RequestBuild(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Http(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<ClientError> for ApiError {
    fn from(_: ClientError) -> Self {
        Self::unknown()
    }
}
