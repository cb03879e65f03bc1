//! Networking modules for the remote Amber HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` handles login/registration, `files` covers permission checks,
//! listing, and upload, and `types` defines the shared wire schema.

pub mod auth;
pub mod files;
pub mod types;

/// Base URL of the remote API. Retarget deployments here.
pub const API_BASE: &str = "http://127.0.0.1:8000/";

/// Join a path onto [`API_BASE`].
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Display message for a failed request: the body's `error` field when
/// present and non-empty, otherwise `fallback`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn failure_message(body: Option<types::ApiError>, fallback: &str) -> String {
    body.and_then(|b| b.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}
