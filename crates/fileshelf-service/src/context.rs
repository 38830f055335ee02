//! Per-request caller credentials and identity resolution.

use serde::{Deserialize, Serialize};
use tracing::debug;

use fileshelf_auth::AuthResolver;
use fileshelf_auth::resolver::UNAUTHORIZED_MESSAGE;
use fileshelf_core::error::AppError;
use fileshelf_core::result::AppResult;
use fileshelf_core::types::UserId;

/// What the caller presented to prove who they are.
///
/// Built by the transport layer and passed into every service call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Session token, if the request carried one.
    pub token: Option<String>,
}

impl Credentials {
    /// Credentials carrying a session token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Credentials carrying nothing.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The session token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Resolve the caller to a well-formed user id.
///
/// A user id that is not a valid identifier is treated the same as a
/// missing session.
pub(crate) async fn resolve_caller(
    auth: &AuthResolver,
    credentials: &Credentials,
) -> AppResult<UserId> {
    let raw = auth.resolve_user(credentials.token()).await?;
    UserId::parse_str(&raw).map_err(|e| {
        debug!(error = %e, "Session bound to a malformed user id");
        AppError::unauthorized(UNAUTHORIZED_MESSAGE)
    })
}
