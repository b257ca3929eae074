use super::*;

#[test]
fn users_summary_pluralizes() {
    assert_eq!(users_summary(0), "0 users");
    assert_eq!(users_summary(1), "1 user");
    assert_eq!(users_summary(3), "3 users");
}

#[test]
fn mutation_success_triggers_exactly_one_refetch() {
    // The dialog success callbacks funnel into a single `reload.run(())`,
    // which issues exactly one new fetch; modeled here on the state level.
    let mut users = UsersState::default();
    let initial = users.begin_fetch();
    users.apply_fetch(initial, Ok(vec![]));

    let after_create = users.begin_fetch();
    assert_eq!(after_create, initial + 1);
    assert!(users.loading);
}
