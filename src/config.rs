//! Client configuration baked in at compile time.
//!
//! A WASM bundle has no process environment at runtime, so the values are read
//! with `option_env!` when the crate is built (e.g. `PULSE_API_BASE_URL=...
//! trunk build`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/auth";

/// Settings for reaching the external authentication service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Base URL of the auth service, without a trailing slash.
    pub api_base_url: String,
    /// Google OAuth client id; federated sign-in is disabled when absent.
    pub google_client_id: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl AuthConfig {
    /// Build config from the build environment.
    ///
    /// Optional:
    /// - `PULSE_API_BASE_URL`: default `http://localhost:3000/auth`
    /// - `PULSE_GOOGLE_CLIENT_ID`: enables the "Continue with Google" flow
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("PULSE_API_BASE_URL"),
            option_env!("PULSE_GOOGLE_CLIENT_ID"),
        )
    }

    /// Build config from raw values. Blank values count as unset.
    pub fn from_values(api_base_url: Option<&str>, google_client_id: Option<&str>) -> Self {
        let api_base_url = non_blank(api_base_url)
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let google_client_id = non_blank(google_client_id).map(str::to_owned);
        Self {
            api_base_url,
            google_client_id,
        }
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
