//! HTTP client for the external auth service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): the HTTP client reports itself unavailable;
//! tests drive the session manager through fake [`AuthClient`]s instead.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx responses become [`AuthError::Remote`] with
//! the body's `message` when the service sent one. A 2xx body that does not
//! match [`Session`] fails fast instead of leaking an ill-shaped record into
//! the store. One attempt per call, no retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{Session, SignUpRequest};
#[cfg(feature = "csr")]
use super::types::GoogleLoginRequest;
#[cfg(any(test, feature = "csr"))]
use super::types::ApiErrorBody;
use crate::config::AuthConfig;
use crate::error::AuthError;
#[cfg(any(test, feature = "csr"))]
use crate::error::{DEFAULT_ERROR_MESSAGE, MALFORMED_RESPONSE_MESSAGE};

/// The two calls the session manager needs from the auth service.
#[async_trait(?Send)]
pub trait AuthClient {
    /// Register a new account and return its session.
    async fn sign_up(&self, request: &SignUpRequest) -> Result<Session, AuthError>;

    /// Exchange a Google ID token for a session.
    async fn google_login(&self, token: &str) -> Result<Session, AuthError>;
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn signup_endpoint(base_url: &str) -> String {
    format!("{base_url}/signup")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn google_login_endpoint(base_url: &str) -> String {
    format!("{base_url}/google-login")
}

/// Best-effort user-facing message from a failed response body.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_owned())
}

/// Validate a successful response body against the session schema.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn parse_session(body: &str) -> Result<Session, AuthError> {
    serde_json::from_str::<Session>(body).map_err(|e| {
        log::warn!("auth service returned a malformed session: {e}");
        AuthError::remote(MALFORMED_RESPONSE_MESSAGE)
    })
}

/// [`AuthClient`] backed by `fetch`.
#[derive(Clone, Debug)]
pub struct HttpAuthClient {
    base_url: String,
}

impl HttpAuthClient {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait(?Send)]
impl AuthClient for HttpAuthClient {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<Session, AuthError> {
        #[cfg(feature = "csr")]
        {
            post_session(&signup_endpoint(&self.base_url), request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(AuthError::remote("not available outside the browser"))
        }
    }

    async fn google_login(&self, token: &str) -> Result<Session, AuthError> {
        #[cfg(feature = "csr")]
        {
            let payload = GoogleLoginRequest {
                token: token.to_owned(),
            };
            post_session(&google_login_endpoint(&self.base_url), &payload).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(AuthError::remote("not available outside the browser"))
        }
    }
}

#[cfg(feature = "csr")]
async fn post_session<B: serde::Serialize>(url: &str, body: &B) -> Result<Session, AuthError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| request_failed(url, &e))?
        .send()
        .await
        .map_err(|e| request_failed(url, &e))?;
    let text = resp.text().await.unwrap_or_default();
    if !resp.ok() {
        log::warn!("auth request to {url} failed: {}", resp.status());
        return Err(AuthError::remote(error_message_from_body(&text)));
    }
    parse_session(&text)
}

#[cfg(feature = "csr")]
fn request_failed(url: &str, err: &gloo_net::Error) -> AuthError {
    log::warn!("auth request to {url} failed: {err}");
    AuthError::remote(DEFAULT_ERROR_MESSAGE)
}
