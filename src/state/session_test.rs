use super::*;

fn signed_in() -> SessionState {
    let mut state = SessionState::booting();
    state.establish("acc-1".to_owned(), "ref-1".to_owned());
    state
}

// =============================================================
// Authentication invariant
// =============================================================

#[test]
fn default_session_is_not_authenticated() {
    assert!(!SessionState::default().is_authenticated());
}

#[test]
fn booting_session_is_loading_and_not_authenticated() {
    let state = SessionState::booting();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn establish_authenticates_and_ends_loading() {
    let state = signed_in();
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.access_token.as_deref(), Some("acc-1"));
    assert_eq!(state.refresh_token.as_deref(), Some("ref-1"));
}

#[test]
fn empty_access_token_is_not_authenticated() {
    let state = SessionState {
        access_token: Some(String::new()),
        refresh_token: Some("ref-1".to_owned()),
        loading: false,
    };
    assert!(!state.is_authenticated());
}

#[test]
fn missing_refresh_token_is_not_authenticated() {
    let state = SessionState {
        access_token: Some("acc-1".to_owned()),
        refresh_token: None,
        loading: false,
    };
    assert!(!state.is_authenticated());
}

// =============================================================
// Refresh
// =============================================================

#[test]
fn apply_refresh_replaces_access_and_keeps_refresh_without_rotation() {
    let mut state = signed_in();
    state.apply_refresh("acc-2".to_owned(), None);
    assert_eq!(state.access_token.as_deref(), Some("acc-2"));
    assert_eq!(state.refresh_token.as_deref(), Some("ref-1"));
    assert!(state.is_authenticated());
}

#[test]
fn apply_refresh_replaces_both_tokens_when_rotated() {
    let mut state = signed_in();
    state.apply_refresh("acc-2".to_owned(), Some("ref-2".to_owned()));
    assert_eq!(state.access_token.as_deref(), Some("acc-2"));
    assert_eq!(state.refresh_token.as_deref(), Some("ref-2"));
}

// =============================================================
// Logout
// =============================================================

#[test]
fn clear_drops_both_tokens() {
    let mut state = signed_in();
    state.clear();
    assert!(!state.is_authenticated());
    assert_eq!(state.access_token, None);
    assert_eq!(state.refresh_token, None);
}

#[test]
fn clear_is_idempotent() {
    let mut once = signed_in();
    once.clear();
    let mut twice = signed_in();
    twice.clear();
    twice.clear();
    assert_eq!(once, twice);
}

#[test]
fn clear_ends_loading_for_booting_session() {
    let mut state = SessionState::booting();
    state.clear();
    assert!(!state.loading);
}

// =============================================================
// Persistence (no-op without a browser, but restore must not panic)
// =============================================================

#[test]
fn restore_returns_none_without_stored_session() {
    assert_eq!(restore(), None);
}
