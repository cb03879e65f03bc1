use super::*;

fn sample_record(id: i64, name: &str) -> FileRecord {
    FileRecord {
        id,
        name: name.to_owned(),
        kind: "image".to_owned(),
        uploaded_by: "alice".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_idle_and_empty() {
    let state = FilesState::default();
    assert!(state.items.is_empty());
    assert!(!state.is_admin);
    assert!(!state.permissions_loading);
    assert!(!state.search_loading);
    assert!(!state.upload_loading);
    assert!(state.error.is_none());
}

// =============================================================
// Permissions
// =============================================================

#[test]
fn finish_permissions_stores_admin_flag() {
    let mut state = FilesState::default();
    state.begin_permissions();
    assert!(state.permissions_loading);
    state.finish_permissions(Ok(true));
    assert!(!state.permissions_loading);
    assert!(state.is_admin);
}

#[test]
fn finish_permissions_failure_keeps_flag_and_reports() {
    let mut state = FilesState::default();
    state.begin_permissions();
    state.finish_permissions(Err("Failed to verify permissions".to_owned()));
    assert!(!state.is_admin);
    assert_eq!(state.error.as_deref(), Some("Failed to verify permissions"));
}

// =============================================================
// Search
// =============================================================

#[test]
fn begin_search_clears_previous_error() {
    let mut state = FilesState {
        error: Some("stale".to_owned()),
        ..FilesState::default()
    };
    state.begin_search();
    assert!(state.search_loading);
    assert!(state.error.is_none());
}

#[test]
fn finish_search_replaces_listing_wholesale() {
    let mut state = FilesState {
        items: vec![sample_record(1, "old.png")],
        ..FilesState::default()
    };
    state.begin_search();
    state.finish_search(Ok(vec![sample_record(2, "new.png"), sample_record(3, "more.pdf")]));
    assert!(!state.search_loading);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].id, 2);
}

#[test]
fn finish_search_failure_keeps_previous_listing() {
    let mut state = FilesState {
        items: vec![sample_record(1, "old.png")],
        ..FilesState::default()
    };
    state.begin_search();
    state.finish_search(Err("Failed to fetch files".to_owned()));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("Failed to fetch files"));
}

// =============================================================
// Upload
// =============================================================

#[test]
fn finish_upload_success_leaves_no_error() {
    let mut state = FilesState::default();
    state.begin_upload();
    assert!(state.upload_loading);
    state.finish_upload(Ok(()));
    assert!(!state.upload_loading);
    assert!(state.error.is_none());
}

// =============================================================
// Shared error slot
// =============================================================

#[test]
fn error_slot_holds_most_recent_message_only() {
    let mut state = FilesState::default();
    state.finish_search(Err("Failed to fetch files".to_owned()));
    state.finish_upload(Err("Failed to upload file".to_owned()));
    assert_eq!(state.error.as_deref(), Some("Failed to upload file"));
}

#[test]
fn loading_flags_are_independent() {
    let mut state = FilesState::default();
    state.begin_permissions();
    state.begin_search();
    state.begin_upload();
    state.finish_search(Ok(vec![]));
    assert!(state.permissions_loading);
    assert!(!state.search_loading);
    assert!(state.upload_loading);
}
