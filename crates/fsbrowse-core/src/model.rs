//! Wire types exchanged with the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// =============================================================================
// Response Envelope
// =============================================================================

/// Response envelope, discriminated by its `status` field.
///
/// ```json
/// {"status": "ok", "data": {...}}
/// {"status": "error", "error": {"title": "...", "detail": "..."}}
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiResponse<T> {
    Ok { data: T },
    Error { error: ApiError },
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self::Ok { data }
    }

    pub fn error(error: ApiError) -> Self {
        Self::Error { error }
    }

    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            Self::Ok { data } => Ok(data),
            Self::Error { error } => Err(error),
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// Server-issued session as reported by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub username: String,
    pub expires: DateTime<Utc>,
}

impl UserSession {
    /// A session is valid while its expiry lies strictly in the future.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires > now
    }
}

/// Login request body.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Directory listing request body.
#[derive(Clone, Debug, Serialize)]
pub struct ListRequest<'a> {
    pub path: &'a str,
}

// =============================================================================
// Directory Tree
// =============================================================================

/// Entry type as reported by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Dir => "dir",
        }
    }
}

/// A node of the remote file tree.
///
/// For directories `size` is the number of direct children and `contents`
/// holds them when the node is the subject of a listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOrDir {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub size: u64,
    /// ISO-8601 timestamp; empty when the backend omits it.
    #[serde(default)]
    pub modified: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<Vec<FileOrDir>>,
}

impl FileOrDir {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Direct children, empty for files and unexpanded directories.
    pub fn children(&self) -> &[FileOrDir] {
        self.contents.as_deref().unwrap_or_default()
    }
}
