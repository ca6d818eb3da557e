use super::*;

#[test]
fn remote_error_displays_message_verbatim() {
    let err = AuthError::remote("Username already taken");
    assert_eq!(err.to_string(), "Username already taken");
    assert_eq!(err.message(), "Username already taken");
}

#[test]
fn oauth_errors_have_user_facing_text() {
    assert_eq!(
        OAuthError::Provider("access_denied".to_owned()).to_string(),
        "Google sign-in failed: access_denied"
    );
    assert_eq!(
        OAuthError::MissingToken.to_string(),
        "Google sign-in response did not include an ID token"
    );
}
