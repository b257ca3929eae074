use super::*;

#[test]
fn validate_new_user_requires_username_and_password() {
    assert_eq!(validate_new_user("alice", "secret"), Ok(()));
    assert_eq!(
        validate_new_user("", "secret"),
        Err("Username and password are required.")
    );
    assert_eq!(
        validate_new_user("alice", ""),
        Err("Username and password are required.")
    );
}

#[test]
fn validate_new_user_rejects_whitespace_username() {
    assert_eq!(
        validate_new_user("   ", "secret"),
        Err("Username and password are required.")
    );
}
