use super::*;

#[test]
fn endpoints_append_paths_to_base() {
    assert_eq!(
        signup_endpoint("http://localhost:3000/auth"),
        "http://localhost:3000/auth/signup"
    );
    assert_eq!(
        google_login_endpoint("https://auth.pulse.test"),
        "https://auth.pulse.test/google-login"
    );
}

// =============================================================
// error_message_from_body
// =============================================================

#[test]
fn error_message_uses_server_message() {
    assert_eq!(
        error_message_from_body(r#"{"message":"Email already registered"}"#),
        "Email already registered"
    );
}

#[test]
fn error_message_falls_back_when_absent() {
    assert_eq!(
        error_message_from_body(r#"{"error":"conflict"}"#),
        DEFAULT_ERROR_MESSAGE
    );
}

#[test]
fn error_message_falls_back_when_body_is_not_json() {
    assert_eq!(
        error_message_from_body("<html>502 Bad Gateway</html>"),
        DEFAULT_ERROR_MESSAGE
    );
    assert_eq!(error_message_from_body(""), DEFAULT_ERROR_MESSAGE);
}

#[test]
fn error_message_falls_back_when_message_is_not_a_string() {
    assert_eq!(
        error_message_from_body(r#"{"message":404}"#),
        DEFAULT_ERROR_MESSAGE
    );
}

#[test]
fn error_message_falls_back_when_message_is_blank() {
    assert_eq!(
        error_message_from_body(r#"{"message":"  "}"#),
        DEFAULT_ERROR_MESSAGE
    );
}

// =============================================================
// parse_session
// =============================================================

#[test]
fn parse_session_accepts_valid_record() {
    let raw = r#"{"username":"alice","email":"a@x.com"}"#;
    let session = parse_session(raw).unwrap();
    assert_eq!(session.username, "alice");
    assert_eq!(session.email, "a@x.com");
}

#[test]
fn parse_session_rejects_ill_shaped_record() {
    let err = parse_session(r#"{"user":"alice"}"#).unwrap_err();
    assert_eq!(err, AuthError::remote(MALFORMED_RESPONSE_MESSAGE));
}

// =============================================================
// HttpAuthClient
// =============================================================

#[test]
fn http_client_uses_configured_base_url() {
    let cfg = AuthConfig::from_values(Some("https://auth.pulse.test/"), None);
    let client = HttpAuthClient::new(&cfg);
    assert_eq!(client.base_url(), "https://auth.pulse.test");
}

#[cfg(not(feature = "csr"))]
#[test]
fn http_client_is_unavailable_outside_browser() {
    let client = HttpAuthClient::new(&AuthConfig::default());
    let pending = client.google_login("tok");
    let err = futures::executor::block_on(pending).unwrap_err();
    assert_eq!(err.message(), "not available outside the browser");
}
