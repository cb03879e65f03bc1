use super::*;

#[test]
fn permissions_endpoint_joins_base() {
    assert_eq!(permissions_endpoint(), format!("{}permissions/", crate::net::API_BASE));
}

#[test]
fn files_endpoint_switches_on_admin_flag() {
    assert_eq!(files_endpoint(false), format!("{}user_files/", crate::net::API_BASE));
    assert_eq!(files_endpoint(true), format!("{}admin_files/", crate::net::API_BASE));
}

#[test]
fn upload_endpoint_embeds_credential_and_type() {
    assert_eq!(
        upload_endpoint("abc123", FileType::Image),
        format!("{}abc123/upload_image/", crate::net::API_BASE)
    );
    assert_eq!(
        upload_endpoint("abc123", FileType::Pdf),
        format!("{}abc123/upload_pdf/", crate::net::API_BASE)
    );
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc123"), "Bearer abc123");
}
