use super::*;

#[test]
fn status_401_classifies_as_unauthorized() {
    assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
    assert!(ApiError::from_status(401).is_unauthorized());
}

#[test]
fn other_statuses_keep_their_code() {
    assert_eq!(ApiError::from_status(500), ApiError::Status { status: 500 });
    assert!(!ApiError::from_status(404).is_unauthorized());
}

#[test]
fn display_messages_are_user_presentable() {
    assert_eq!(ApiError::Unauthorized.to_string(), "not authorized");
    assert_eq!(ApiError::Status { status: 429 }.to_string(), "request failed: 429");
    assert_eq!(
        ApiError::Network("connection refused".to_owned()).to_string(),
        "network error: connection refused"
    );
}
