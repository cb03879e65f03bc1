//! Dashboard domain state for the file tools.
//!
//! DESIGN
//! ======
//! Each network call keeps its own loading flag since permission checks,
//! searches, and uploads can overlap; completion order is last-writer-wins.
//! `error` holds only the most recent failure message; no queue, no codes.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use crate::net::types::FileRecord;

/// File tooling state shared by the dashboard screens.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilesState {
    pub items: Vec<FileRecord>,
    pub is_admin: bool,
    pub permissions_loading: bool,
    pub search_loading: bool,
    pub upload_loading: bool,
    pub error: Option<String>,
}

impl FilesState {
    pub fn begin_permissions(&mut self) {
        self.permissions_loading = true;
    }

    pub fn finish_permissions(&mut self, result: Result<bool, String>) {
        self.permissions_loading = false;
        match result {
            Ok(is_admin) => self.is_admin = is_admin,
            Err(message) => self.error = Some(message),
        }
    }

    pub fn begin_search(&mut self) {
        self.search_loading = true;
        self.error = None;
    }

    /// Record a search result, replacing the listing wholesale.
    pub fn finish_search(&mut self, result: Result<Vec<FileRecord>, String>) {
        self.search_loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(message) => self.error = Some(message),
        }
    }

    pub fn begin_upload(&mut self) {
        self.upload_loading = true;
        self.error = None;
    }

    pub fn finish_upload(&mut self, result: Result<(), String>) {
        self.upload_loading = false;
        if let Err(message) = result {
            self.error = Some(message);
        }
    }
}
