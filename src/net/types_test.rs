use super::*;

#[test]
fn file_record_deserializes_wire_names() {
    let record: FileRecord = serde_json::from_str(
        r#"{"id": 7, "name": "scan.pdf", "type": "pdf", "uploaded_by": "alice"}"#,
    )
    .unwrap();
    assert_eq!(record.id, 7);
    assert_eq!(record.name, "scan.pdf");
    assert_eq!(record.kind, "pdf");
    assert_eq!(record.uploaded_by, "alice");
}

#[test]
fn login_response_reads_signature() {
    let body: LoginResponse = serde_json::from_str(r#"{"signature": "abc123"}"#).unwrap();
    assert_eq!(body.signature, "abc123");
}

#[test]
fn permissions_response_reads_admin_flag() {
    let body: PermissionsResponse = serde_json::from_str(r#"{"is_admin": true}"#).unwrap();
    assert!(body.is_admin);
}

#[test]
fn api_error_tolerates_missing_field() {
    let body: ApiError = serde_json::from_str("{}").unwrap();
    assert!(body.error.is_none());

    let body: ApiError = serde_json::from_str(r#"{"error": "bad creds"}"#).unwrap();
    assert_eq!(body.error.as_deref(), Some("bad creds"));
}

#[test]
fn file_type_wire_names() {
    assert_eq!(FileType::Image.as_str(), "image");
    assert_eq!(FileType::Pdf.as_str(), "pdf");
}

#[test]
fn file_type_from_choice_defaults_to_image() {
    assert_eq!(FileType::from_choice("pdf"), FileType::Pdf);
    assert_eq!(FileType::from_choice("image"), FileType::Image);
    assert_eq!(FileType::from_choice("unknown"), FileType::Image);
}
