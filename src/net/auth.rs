//! Login and registration calls against the remote API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since authentication is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (non-2xx status, transport, malformed JSON) flattens to a
//! single display string bound for the form that triggered the call.
//! Nothing is retried.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::Session;

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_FALLBACK: &str = "Login failed!";
#[cfg(any(test, feature = "hydrate"))]
const SIGNUP_FALLBACK: &str = "Signup failed!";

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint() -> String {
    crate::net::endpoint("login/")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint() -> String {
    crate::net::endpoint("register/")
}

/// Session produced by a successful login: the response `signature` becomes
/// the bearer credential, the submitted username the client label.
#[cfg(any(test, feature = "hydrate"))]
fn session_from_login(body: crate::net::types::LoginResponse, username: &str) -> Session {
    Session::from_parts(Some(body.signature), Some(username.to_owned()))
}

/// Log in via `POST login/` and produce an authenticated [`Session`].
///
/// # Errors
///
/// Returns the server's `error` message (or a generic fallback) on a
/// non-2xx status, and the transport/parse error text otherwise.
pub async fn login(username: &str, password: &str) -> Result<Session, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = gloo_net::http::Request::post(&login_endpoint())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.json::<crate::net::types::ApiError>().await.ok();
            return Err(crate::net::failure_message(body, LOGIN_FALLBACK));
        }
        let body: crate::net::types::LoginResponse =
            resp.json().await.map_err(|e| e.to_string())?;
        let fresh = session_from_login(body, username);
        if fresh.authenticated() {
            Ok(fresh)
        } else {
            // 2xx with an empty signature cannot authenticate.
            Err(LOGIN_FALLBACK.to_owned())
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Register a new account via `POST register/`. Any 2xx status is success;
/// no structured payload is required.
///
/// # Errors
///
/// Returns the server's `error` message (or a generic fallback) on a
/// non-2xx status, and the transport error text otherwise.
pub async fn register(username: &str, email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        });
        let resp = gloo_net::http::Request::post(&register_endpoint())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.json::<crate::net::types::ApiError>().await.ok();
            return Err(crate::net::failure_message(body, SIGNUP_FALLBACK));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        Err("not available on server".to_owned())
    }
}
