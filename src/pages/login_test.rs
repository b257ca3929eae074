use super::*;

#[test]
fn validate_identifier_input_trims_and_requires_value() {
    assert_eq!(
        validate_identifier_input("  user@example.com  "),
        Ok("user@example.com".to_owned())
    );
    assert_eq!(
        validate_identifier_input("   "),
        Err("Enter an email or phone number first.")
    );
}

#[test]
fn validate_code_input_trims_and_requires_six_characters() {
    assert_eq!(validate_code_input(" 123456 "), Ok("123456".to_owned()));
    assert_eq!(validate_code_input(""), Err("Enter the 6-character code."));
}

#[test]
fn validate_code_input_rejects_short_codes() {
    assert_eq!(validate_code_input("12345"), Err("Enter the 6-character code."));
}

#[test]
fn validate_code_input_rejects_long_codes() {
    assert_eq!(validate_code_input("1234567"), Err("Enter the 6-character code."));
}

#[test]
fn request_then_verify_walks_the_two_steps() {
    let mut flow = LoginFlow::default();
    flow.identifier = "user@example.com".to_owned();
    let identifier = validate_identifier_input(&flow.identifier).unwrap();
    flow.code_requested(identifier);
    assert_eq!(flow.step, LoginStep::AwaitingCode);

    flow.code = "123456".to_owned();
    assert!(validate_code_input(&flow.code).is_ok());
}
