//! TFE token resolution

use log::debug;

use crate::config::credentials;
use crate::error::{Result, TfeError};

/// Resolve the API token from the `TFE_TOKEN` environment variable
///
/// Called before any network activity so a missing credential fails fast.
pub fn resolve_token() -> Result<String> {
    token_from(std::env::var(credentials::TOKEN_ENV_VAR).ok())
}

/// Validate a raw token value; unset and empty are both treated as missing
fn token_from(value: Option<String>) -> Result<String> {
    match value {
        Some(token) if !token.trim().is_empty() => {
            debug!(
                "Using token from {} environment variable",
                credentials::TOKEN_ENV_VAR
            );
            Ok(token)
        }
        _ => Err(TfeError::TokenNotFound(format!(
            "Environment variable {} not set",
            credentials::TOKEN_ENV_VAR
        ))),
    }
}
