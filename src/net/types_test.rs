use super::*;

// =============================================================
// Session
// =============================================================

#[test]
fn session_deserializes_required_fields() {
    let raw = r#"{"username":"alice","email":"a@x.com"}"#;
    let session: Session = serde_json::from_str(raw).unwrap();
    assert_eq!(session, Session::new("alice", "a@x.com"));
}

#[test]
fn session_preserves_extra_fields_through_serialization() {
    let raw = r#"{"username":"alice","email":"a@x.com","id":42,"avatar":null}"#;
    let session: Session = serde_json::from_str(raw).unwrap();
    assert_eq!(session.extra.get("id"), Some(&serde_json::json!(42)));

    let value = serde_json::to_value(&session).unwrap();
    let expected = serde_json::json!({"username":"alice","email":"a@x.com","id":42,"avatar":null});
    assert_eq!(value, expected);
}

#[test]
fn session_rejects_missing_email() {
    let raw = r#"{"username":"alice"}"#;
    assert!(serde_json::from_str::<Session>(raw).is_err());
}

#[test]
fn session_rejects_non_string_username() {
    let raw = r#"{"username":7,"email":"a@x.com"}"#;
    assert!(serde_json::from_str::<Session>(raw).is_err());
}

// =============================================================
// Requests
// =============================================================

#[test]
fn sign_up_request_serializes_expected_shape() {
    let req = SignUpRequest {
        username: "alice".to_owned(),
        email: "a@x.com".to_owned(),
        password: "secret123".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({"username":"alice","email":"a@x.com","password":"secret123"})
    );
}

#[test]
fn google_login_request_serializes_token() {
    let req = GoogleLoginRequest {
        token: "tok".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({"token":"tok"})
    );
}

#[test]
fn api_error_body_message_is_optional() {
    let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, None);
}
