use super::*;

#[test]
fn should_redirect_when_loaded_and_unauthenticated() {
    let state = SessionState::default();
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_session_is_restoring() {
    let state = SessionState::booting();
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_authenticated() {
    let mut state = SessionState::booting();
    state.establish("acc-1".to_owned(), "ref-1".to_owned());
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_redirect_again_after_logout() {
    let mut state = SessionState::booting();
    state.establish("acc-1".to_owned(), "ref-1".to_owned());
    state.clear();
    assert!(should_redirect_unauth(&state));
}
