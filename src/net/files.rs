//! File-service calls: permission check, listing, and multipart upload.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every call here bears the session credential as a bearer token. A
//! credential the backend rejects surfaces as a call error; it does not
//! de-authenticate the session.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use crate::net::types::FileRecord;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::FileType;

#[cfg(any(test, feature = "hydrate"))]
const PERMISSIONS_FALLBACK: &str = "Failed to verify permissions";
#[cfg(any(test, feature = "hydrate"))]
const SEARCH_FALLBACK: &str = "Failed to fetch files";
#[cfg(any(test, feature = "hydrate"))]
const UPLOAD_FALLBACK: &str = "Failed to upload file";

#[cfg(any(test, feature = "hydrate"))]
fn permissions_endpoint() -> String {
    crate::net::endpoint("permissions/")
}

/// Listing endpoint for the caller's visibility scope.
#[cfg(any(test, feature = "hydrate"))]
fn files_endpoint(is_admin: bool) -> String {
    crate::net::endpoint(if is_admin { "admin_files/" } else { "user_files/" })
}

/// Upload endpoint parameterized by credential and file type.
#[cfg(any(test, feature = "hydrate"))]
fn upload_endpoint(credential: &str, file_type: FileType) -> String {
    crate::net::endpoint(&format!("{credential}/upload_{}/", file_type.as_str()))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(credential: &str) -> String {
    format!("Bearer {credential}")
}

/// Fetch the caller's admin flag from `permissions/`.
///
/// # Errors
///
/// Status, transport, and parse failures all collapse to one message.
pub async fn check_permissions(credential: &str) -> Result<bool, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&permissions_endpoint())
            .header("Authorization", &bearer(credential))
            .send()
            .await
            .map_err(|_| PERMISSIONS_FALLBACK.to_owned())?;
        if !resp.ok() {
            return Err(PERMISSIONS_FALLBACK.to_owned());
        }
        let body: crate::net::types::PermissionsResponse = resp
            .json()
            .await
            .map_err(|_| PERMISSIONS_FALLBACK.to_owned())?;
        Ok(body.is_admin)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credential;
        Err("not available on server".to_owned())
    }
}

/// Fetch the file listing for the caller's scope.
///
/// # Errors
///
/// Returns a generic message on a non-2xx status and the transport/parse
/// error text otherwise.
pub async fn search_files(credential: &str, is_admin: bool) -> Result<Vec<FileRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&files_endpoint(is_admin))
            .header("Authorization", &bearer(credential))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(SEARCH_FALLBACK.to_owned());
        }
        resp.json::<Vec<FileRecord>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (credential, is_admin);
        Err("not available on server".to_owned())
    }
}

/// Upload one file as multipart form data.
///
/// Fields: the blob under the file-type name, `provider` (credential),
/// `client` (client label), and `name` (the file's own name). The blob
/// passes through unmodified.
///
/// # Errors
///
/// Returns the server's `error` message (or a generic fallback) on a
/// non-2xx status, and the transport error text otherwise.
#[cfg(feature = "hydrate")]
pub async fn upload_file(
    credential: &str,
    client_label: &str,
    file_type: FileType,
    file: &web_sys::File,
) -> Result<(), String> {
    let form = web_sys::FormData::new().map_err(|_| UPLOAD_FALLBACK.to_owned())?;
    form.append_with_blob_and_filename(file_type.as_str(), file, &file.name())
        .map_err(|_| UPLOAD_FALLBACK.to_owned())?;
    form.append_with_str("provider", credential)
        .map_err(|_| UPLOAD_FALLBACK.to_owned())?;
    form.append_with_str("client", client_label)
        .map_err(|_| UPLOAD_FALLBACK.to_owned())?;
    form.append_with_str("name", &file.name())
        .map_err(|_| UPLOAD_FALLBACK.to_owned())?;

    let resp = gloo_net::http::Request::post(&upload_endpoint(credential, file_type))
        .header("Authorization", &bearer(credential))
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let body = resp.json::<crate::net::types::ApiError>().await.ok();
        return Err(crate::net::failure_message(body, UPLOAD_FALLBACK));
    }
    Ok(())
}
