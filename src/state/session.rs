//! Client-side session snapshot persisted across reloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is restored once at startup, committed by the login flow,
//! and cleared by logout. Route guards and API calls read it through a
//! context signal; localStorage is never consulted anywhere else.
//!
//! There is no expiry, refresh, or revocation: a credential is trusted
//! until explicit logout. A backend rejection on a later call surfaces as
//! that call's error and leaves the session untouched.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// localStorage key holding the bearer credential.
pub const SIGNATURE_KEY: &str = "auth_signature";
/// localStorage key holding the client label sent with uploads.
pub const CLIENT_KEY: &str = "client_name";

/// Immutable snapshot of the current authentication state.
///
/// Authenticated iff both the credential and the client label are present
/// and non-empty; there is no intermediate state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    credential: Option<String>,
    client_label: Option<String>,
}

impl Session {
    /// Build a snapshot from optional parts, normalizing empty or missing
    /// values to the unauthenticated state so the invariant holds by
    /// construction.
    pub fn from_parts(credential: Option<String>, client_label: Option<String>) -> Self {
        let credential = credential.filter(|v| !v.is_empty());
        let client_label = client_label.filter(|v| !v.is_empty());
        if credential.is_some() && client_label.is_some() {
            Self {
                credential,
                client_label,
            }
        } else {
            Self::default()
        }
    }

    pub fn authenticated(&self) -> bool {
        self.credential.is_some() && self.client_label.is_some()
    }

    /// Credential and client label, present only when authenticated.
    pub fn parts(&self) -> Option<(&str, &str)> {
        match (&self.credential, &self.client_label) {
            (Some(credential), Some(label)) => Some((credential, label)),
            _ => None,
        }
    }
}

/// Rebuild the session from localStorage. Synchronous, so no loading state
/// exists between startup and the first guard evaluation.
pub fn restore() -> Session {
    #[cfg(feature = "hydrate")]
    {
        Session::from_parts(read_key(SIGNATURE_KEY), read_key(CLIENT_KEY))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Session::default()
    }
}

/// Persist a fresh login and return the authenticated snapshot.
///
/// Write-through: both keys are written sequentially before this returns.
/// No transactional guarantee spans the pair.
pub fn commit(credential: &str, client_label: &str) -> Session {
    write_key(SIGNATURE_KEY, credential);
    write_key(CLIENT_KEY, client_label);
    Session::from_parts(Some(credential.to_owned()), Some(client_label.to_owned()))
}

/// Drop the persisted session and return the unauthenticated snapshot.
pub fn clear() -> Session {
    remove_key(SIGNATURE_KEY);
    remove_key(CLIENT_KEY);
    Session::default()
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn read_key(key: &str) -> Option<String> {
    storage().and_then(|s| s.get_item(key).ok().flatten())
}

fn write_key(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

fn remove_key(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
