//! Wire DTOs for the auth service boundary.
//!
//! DESIGN
//! ======
//! `Session` is both the sign-up/sign-in response and the record persisted in
//! `localStorage`, so whatever the service sends back is kept lossless: the two
//! required fields are typed, everything else rides along in `extra`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The signed-in user as returned by the auth service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub email: String,
    /// Additional fields returned by the service, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Session {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            extra: Map::new(),
        }
    }
}

/// Body of `POST {base}/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST {base}/google-login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleLoginRequest {
    pub token: String,
}

/// Error body the service may attach to a failed response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
