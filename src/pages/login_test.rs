use super::*;

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("  ", "secret"),
        Err("Enter your username and password.")
    );
    assert_eq!(
        validate_login_input("alice", ""),
        Err("Enter your username and password.")
    );
}

#[test]
fn validate_login_input_accepts_filled_form() {
    assert_eq!(validate_login_input("alice", "secret"), Ok(()));
}
