use super::*;

#[test]
fn user_detail_endpoint_formats_expected_path() {
    assert_eq!(user_detail_endpoint(42), "/api/users/42");
}

#[test]
fn bearer_header_formats_scheme_and_token() {
    assert_eq!(bearer("tok-1"), "Bearer tok-1");
}

#[test]
fn otp_request_payload_carries_identifier() {
    assert_eq!(
        otp_request_payload("user@example.com"),
        serde_json::json!({ "identifier": "user@example.com" })
    );
}

#[test]
fn otp_verify_payload_carries_identifier_and_code() {
    assert_eq!(
        otp_verify_payload("09123456789", "123456"),
        serde_json::json!({ "identifier": "09123456789", "code": "123456" })
    );
}

#[test]
fn refresh_payload_carries_refresh_token() {
    assert_eq!(refresh_payload("ref-1"), serde_json::json!({ "refresh": "ref-1" }));
}
