use super::*;

fn user(id: i64, username: &str) -> User {
    User {
        id,
        username: Some(username.to_owned()),
        email: None,
        phone: None,
        first_name: None,
        last_name: None,
        is_active: true,
    }
}

#[test]
fn begin_fetch_sets_loading_and_increments_issuance() {
    let mut state = UsersState::default();
    let first = state.begin_fetch();
    let second = state.begin_fetch();
    assert!(state.loading);
    assert_eq!(second, first + 1);
}

#[test]
fn begin_fetch_clears_a_previous_error() {
    let mut state = UsersState::default();
    let seq = state.begin_fetch();
    state.apply_fetch(seq, Err("boom".to_owned()));
    assert!(state.error.is_some());
    state.begin_fetch();
    assert_eq!(state.error, None);
}

#[test]
fn apply_fetch_in_order_replaces_items() {
    let mut state = UsersState::default();
    let seq = state.begin_fetch();
    assert!(state.apply_fetch(seq, Ok(vec![user(1, "alice")])));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].username.as_deref(), Some("alice"));
}

#[test]
fn stale_response_is_dropped_after_newer_one_applied() {
    let mut state = UsersState::default();
    let slow = state.begin_fetch();
    let fast = state.begin_fetch();
    assert!(state.apply_fetch(fast, Ok(vec![user(2, "bob")])));
    // The earlier-issued fetch resolves later; issuance order wins.
    assert!(!state.apply_fetch(slow, Ok(vec![user(1, "alice")])));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, 2);
}

#[test]
fn earlier_response_applies_then_newer_response_overrides() {
    let mut state = UsersState::default();
    let first = state.begin_fetch();
    let second = state.begin_fetch();
    assert!(state.apply_fetch(first, Ok(vec![user(1, "alice")])));
    assert!(state.apply_fetch(second, Ok(vec![user(1, "alice"), user(2, "bob")])));
    assert_eq!(state.items.len(), 2);
}

#[test]
fn loading_persists_until_latest_issued_fetch_completes() {
    let mut state = UsersState::default();
    let first = state.begin_fetch();
    let second = state.begin_fetch();
    state.apply_fetch(first, Ok(vec![]));
    assert!(state.loading);
    state.apply_fetch(second, Ok(vec![]));
    assert!(!state.loading);
}

#[test]
fn failed_fetch_keeps_previous_items() {
    let mut state = UsersState::default();
    let seq = state.begin_fetch();
    state.apply_fetch(seq, Ok(vec![user(1, "alice")]));
    let seq = state.begin_fetch();
    assert!(state.apply_fetch(seq, Err("network error".to_owned())));
    assert_eq!(state.error.as_deref(), Some("network error"));
    assert_eq!(state.items.len(), 1);
}

#[test]
fn stale_error_is_dropped() {
    let mut state = UsersState::default();
    let slow = state.begin_fetch();
    let fast = state.begin_fetch();
    state.apply_fetch(fast, Ok(vec![user(1, "alice")]));
    assert!(!state.apply_fetch(slow, Err("late failure".to_owned())));
    assert_eq!(state.error, None);
    assert_eq!(state.items.len(), 1);
}
