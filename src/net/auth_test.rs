use super::*;

use crate::net::types::{ApiError, LoginResponse};

#[test]
fn login_endpoint_joins_base() {
    assert_eq!(login_endpoint(), format!("{}login/", crate::net::API_BASE));
}

#[test]
fn register_endpoint_joins_base() {
    assert_eq!(register_endpoint(), format!("{}register/", crate::net::API_BASE));
}

#[test]
fn session_from_login_carries_signature_and_username() {
    let body: LoginResponse = serde_json::from_str(r#"{"signature": "abc123"}"#).unwrap();
    let session = session_from_login(body, "alice");
    assert!(session.authenticated());
    assert_eq!(session.parts(), Some(("abc123", "alice")));
}

#[test]
fn session_from_login_rejects_empty_signature() {
    let body: LoginResponse = serde_json::from_str(r#"{"signature": ""}"#).unwrap();
    let session = session_from_login(body, "alice");
    assert!(!session.authenticated());
}

#[test]
fn failure_message_prefers_server_error() {
    let body: ApiError = serde_json::from_str(r#"{"error": "bad creds"}"#).unwrap();
    assert_eq!(crate::net::failure_message(Some(body), LOGIN_FALLBACK), "bad creds");
}

#[test]
fn failure_message_falls_back_when_error_absent() {
    assert_eq!(crate::net::failure_message(None, LOGIN_FALLBACK), "Login failed!");
    let body: ApiError = serde_json::from_str("{}").unwrap();
    assert_eq!(crate::net::failure_message(Some(body), SIGNUP_FALLBACK), "Signup failed!");
}

#[test]
fn failure_message_ignores_empty_error() {
    let body = ApiError {
        error: Some(String::new()),
    };
    assert_eq!(crate::net::failure_message(Some(body), LOGIN_FALLBACK), "Login failed!");
}
