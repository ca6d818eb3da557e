//! Error types surfaced to views.
//!
//! ERROR HANDLING
//! ==============
//! Every failure of the remote auth service collapses into a single
//! [`AuthError::Remote`] carrying a message fit for display. Views render the
//! message as-is; nothing here is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Fallback when a failed response carries no usable `message`.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// Reported when a successful response does not look like a session.
pub const MALFORMED_RESPONSE_MESSAGE: &str = "An unknown error occurred";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The auth service could not complete the request.
    #[error("{0}")]
    Remote(String),
}

impl AuthError {
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Remote(message) => message,
        }
    }
}

/// Failures while completing the Google OAuth redirect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OAuthError {
    #[error("Google sign-in failed: {0}")]
    Provider(String),
    #[error("Google sign-in response did not include an ID token")]
    MissingToken,
    #[error("Google sign-in state did not match; please try again")]
    StateMismatch,
}
