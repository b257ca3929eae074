use super::*;

#[test]
fn user_deserializes_with_absent_optional_fields() {
    let user: User = serde_json::from_value(serde_json::json!({ "id": 7 })).unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.username, None);
    assert_eq!(user.email, None);
    assert!(user.is_active);
}

#[test]
fn user_is_active_defaults_to_true_when_missing() {
    let user: User =
        serde_json::from_value(serde_json::json!({ "id": 1, "username": "alice" })).unwrap();
    assert!(user.is_active);
    let user: User =
        serde_json::from_value(serde_json::json!({ "id": 1, "is_active": false })).unwrap();
    assert!(!user.is_active);
}

#[test]
fn new_user_from_form_normalizes_blank_optionals() {
    let payload = NewUser::from_form("  alice ", "secret", "", "   ", "Alice", "", true);
    assert_eq!(payload.username, "alice");
    assert_eq!(payload.password, "secret");
    assert_eq!(payload.email, None);
    assert_eq!(payload.phone, None);
    assert_eq!(payload.first_name.as_deref(), Some("Alice"));
    assert_eq!(payload.last_name, None);
    assert!(payload.is_active);
}

#[test]
fn user_update_from_form_normalizes_blank_fields() {
    let payload = UserUpdate::from_form("alice", " a@b.com ", "", "", "", false);
    assert_eq!(payload.username.as_deref(), Some("alice"));
    assert_eq!(payload.email.as_deref(), Some("a@b.com"));
    assert_eq!(payload.phone, None);
    assert!(!payload.is_active);
}

#[test]
fn refreshed_tokens_deserialize_without_rotation() {
    let tokens: RefreshedTokens =
        serde_json::from_value(serde_json::json!({ "access": "acc-2" })).unwrap();
    assert_eq!(tokens.access, "acc-2");
    assert_eq!(tokens.refresh, None);
}

#[test]
fn refreshed_tokens_deserialize_with_rotation() {
    let tokens: RefreshedTokens =
        serde_json::from_value(serde_json::json!({ "access": "acc-2", "refresh": "ref-2" }))
            .unwrap();
    assert_eq!(tokens.refresh.as_deref(), Some("ref-2"));
}
