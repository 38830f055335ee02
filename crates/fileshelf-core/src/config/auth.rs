//! Credential lookup configuration.

use serde::{Deserialize, Serialize};

/// Where the session token travels and where the Auth Service keeps it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Request header carrying the session token (case-insensitive).
    #[serde(default = "default_token_header")]
    pub token_header: String,
    /// Cache key prefix under which the Auth Service stores `token -> user id`.
    #[serde(default = "default_token_key_prefix")]
    pub token_key_prefix: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_header: default_token_header(),
            token_key_prefix: default_token_key_prefix(),
        }
    }
}

fn default_token_header() -> String {
    "x-token".to_string()
}

fn default_token_key_prefix() -> String {
    "auth_".to_string()
}
