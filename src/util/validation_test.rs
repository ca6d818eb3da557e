use super::*;

// =============================================================
// PasswordStrength
// =============================================================

#[test]
fn password_strength_buckets_by_length() {
    assert_eq!(PasswordStrength::of(""), PasswordStrength::Weak);
    assert_eq!(PasswordStrength::of("abcde"), PasswordStrength::Weak);
    assert_eq!(PasswordStrength::of("abcdef"), PasswordStrength::Medium);
    assert_eq!(PasswordStrength::of("abcdefgh"), PasswordStrength::Medium);
    assert_eq!(PasswordStrength::of("abcdefghi"), PasswordStrength::Strong);
}

#[test]
fn password_strength_counts_characters_not_bytes() {
    assert_eq!(PasswordStrength::of("ééééé"), PasswordStrength::Weak);
}

#[test]
fn password_strength_labels_and_classes() {
    assert_eq!(PasswordStrength::Medium.label(), "Medium");
    assert_eq!(PasswordStrength::Strong.css_class(), "strength strong");
}

// =============================================================
// Email / confirmation
// =============================================================

#[test]
fn email_format_accepts_common_addresses() {
    assert!(is_valid_email("a@x.com"));
    assert!(is_valid_email("first.last+tag@sub.example.org"));
}

#[test]
fn email_format_rejects_malformed_addresses() {
    for bad in [
        "",
        "alice",
        "alice@",
        "alice@host",
        "a b@x.com",
        "@x.com",
        "a@@x.com",
    ] {
        assert!(!is_valid_email(bad), "expected invalid: {bad:?}");
    }
}

#[test]
fn passwords_match_is_exact() {
    assert!(passwords_match("secret123", "secret123"));
    assert!(!passwords_match("secret123", "Secret123"));
}

// =============================================================
// validate_sign_up
// =============================================================

fn form(username: &str, email: &str, password: &str, confirm: &str) -> SignUpForm {
    SignUpForm {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

#[test]
fn validate_sign_up_trims_and_builds_request() {
    let fields = form(" alice ", " a@x.com ", "secret123", "secret123");
    let req = validate_sign_up(&fields).unwrap();
    assert_eq!(
        req,
        SignUpRequest {
            username: "alice".to_owned(),
            email: "a@x.com".to_owned(),
            password: "secret123".to_owned(),
        }
    );
}

#[test]
fn validate_sign_up_requires_fields() {
    assert_eq!(
        validate_sign_up(&form("  ", "a@x.com", "secret123", "secret123")),
        Err("Fill in username, email and password.")
    );
    assert_eq!(
        validate_sign_up(&form("alice", "a@x.com", "", "")),
        Err("Fill in username, email and password.")
    );
}

#[test]
fn validate_sign_up_rejects_bad_email() {
    assert_eq!(
        validate_sign_up(&form("alice", "alice", "secret123", "secret123")),
        Err("Invalid email format")
    );
}

#[test]
fn validate_sign_up_rejects_mismatched_passwords() {
    assert_eq!(
        validate_sign_up(&form("alice", "a@x.com", "secret123", "secret12")),
        Err("Passwords do not match")
    );
}

// =============================================================
// Misc
// =============================================================

#[test]
fn username_suggestions_are_non_empty() {
    assert_eq!(
        username_suggestions(),
        &["coolUser123", "devKing99", "pulseUser"]
    );
}

#[test]
fn avatar_initial_uppercases_first_letter() {
    assert_eq!(avatar_initial("alice"), "A");
    assert_eq!(avatar_initial(" émile"), "É");
}

#[test]
fn avatar_initial_falls_back_for_empty_name() {
    assert_eq!(avatar_initial(""), "?");
}
