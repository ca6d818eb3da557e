//! Form predicates for the sign-up and login screens.
//!
//! These are cosmetic client-side checks; the auth service stays the
//! authority on what it accepts.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::SignUpRequest;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static USERNAME_SUGGESTIONS: [&str; 3] = ["coolUser123", "devKing99", "pulseUser"];

/// Coarse password strength shown under the password field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// More than 8 characters is strong, more than 5 is medium.
    pub fn of(password: &str) -> Self {
        match password.chars().count() {
            n if n > 8 => Self::Strong,
            n if n > 5 => Self::Medium,
            _ => Self::Weak,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    /// CSS modifier class, e.g. `strength medium`.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Weak => "strength weak",
            Self::Medium => "strength medium",
            Self::Strong => "strength strong",
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm
}

/// Raw sign-up form values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Check a sign-up form and build the request to send.
///
/// # Errors
///
/// Returns the message to show next to the form when a field is missing, the
/// email is malformed, or the passwords differ.
pub fn validate_sign_up(form: &SignUpForm) -> Result<SignUpRequest, &'static str> {
    let username = form.username.trim();
    let email = form.email.trim();
    if username.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err("Fill in username, email and password.");
    }
    if !is_valid_email(email) {
        return Err("Invalid email format");
    }
    if !passwords_match(&form.password, &form.confirm_password) {
        return Err("Passwords do not match");
    }
    Ok(SignUpRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
    })
}

/// Username ideas offered once the user starts typing.
pub fn username_suggestions() -> &'static [&'static str] {
    &USERNAME_SUGGESTIONS
}

/// Single upper-cased letter for the navbar avatar.
pub fn avatar_initial(username: &str) -> String {
    username
        .trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}
