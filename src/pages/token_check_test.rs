use super::*;

#[test]
fn outcome_line_for_success() {
    let (label, detail) = outcome_line(&Ok(()));
    assert_eq!(label, "Success");
    assert_eq!(detail, "The access token was accepted by the backend.");
}

#[test]
fn outcome_line_for_failure_carries_the_message() {
    let (label, detail) = outcome_line(&Err("not authorized".to_owned()));
    assert_eq!(label, "Failed");
    assert_eq!(detail, "not authorized");
}
