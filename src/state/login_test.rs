use super::*;

#[test]
fn flow_starts_awaiting_identifier() {
    let flow = LoginFlow::default();
    assert_eq!(flow.step, LoginStep::AwaitingIdentifier);
    assert!(flow.identifier.is_empty());
    assert!(flow.code.is_empty());
}

#[test]
fn code_requested_advances_and_records_identifier() {
    let mut flow = LoginFlow::default();
    flow.code_requested("user@example.com".to_owned());
    assert_eq!(flow.step, LoginStep::AwaitingCode);
    assert_eq!(flow.identifier, "user@example.com");
}

#[test]
fn code_requested_discards_code_from_a_previous_attempt() {
    let mut flow = LoginFlow {
        step: LoginStep::AwaitingIdentifier,
        identifier: String::new(),
        code: "123456".to_owned(),
    };
    flow.code_requested("user@example.com".to_owned());
    assert!(flow.code.is_empty());
}

#[test]
fn reset_returns_to_identifier_step_and_clears_code() {
    let mut flow = LoginFlow::default();
    flow.code_requested("user@example.com".to_owned());
    flow.code = "123456".to_owned();
    flow.reset();
    assert_eq!(flow.step, LoginStep::AwaitingIdentifier);
    assert!(flow.code.is_empty());
    // The identifier stays so the user can correct it instead of retyping.
    assert_eq!(flow.identifier, "user@example.com");
}

#[test]
fn verify_failure_does_not_transition() {
    // Verify failure is modeled by simply not calling any transition: the
    // flow must still be at the code step with the identifier intact.
    let mut flow = LoginFlow::default();
    flow.code_requested("09123456789".to_owned());
    flow.code = "000000".to_owned();
    assert_eq!(flow.step, LoginStep::AwaitingCode);
    assert_eq!(flow.identifier, "09123456789");
}
