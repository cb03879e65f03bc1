//! Shared wire schema for the Amber HTTP API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// One stored file as returned by the listing endpoints.
///
/// Read-only projection of server data; the dashboard replaces its list
/// wholesale on every search.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FileRecord {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub uploaded_by: String,
}

/// Body of a successful `login/` response.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub signature: String,
}

/// Body of a `permissions/` response.
#[derive(Debug, Deserialize)]
pub struct PermissionsResponse {
    pub is_admin: bool,
}

/// Error envelope the API attaches to non-2xx responses. The `error` field
/// is optional; absent or malformed bodies fall back to a generic message.
#[derive(Debug, Default, Deserialize)]
pub struct ApiError {
    pub error: Option<String>,
}

/// File categories the upload endpoint accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FileType {
    #[default]
    Image,
    Pdf,
}

impl FileType {
    /// Wire name used in the upload endpoint path and multipart field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Pdf => "pdf",
        }
    }

    /// Parse a `<select>` option value, defaulting to image.
    pub fn from_choice(value: &str) -> Self {
        match value {
            "pdf" => Self::Pdf,
            _ => Self::Image,
        }
    }
}
