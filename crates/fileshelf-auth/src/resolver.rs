//! Caller identity resolution.

use std::sync::Arc;

use tracing::debug;

use fileshelf_core::error::AppError;
use fileshelf_core::result::AppResult;
use fileshelf_core::traits::session::SessionLookup;

/// Message carried by every authentication failure.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Resolves a request credential to the user it is bound to.
#[derive(Debug, Clone)]
pub struct AuthResolver {
    sessions: Arc<dyn SessionLookup>,
}

impl AuthResolver {
    /// Creates a resolver over the given session lookup.
    pub fn new(sessions: Arc<dyn SessionLookup>) -> Self {
        Self { sessions }
    }

    /// Returns the raw user identifier bound to `token`.
    ///
    /// Fails with `Unauthorized` when the token is absent, empty, or has no
    /// session. The token is looked up exactly as presented and the
    /// identifier is not format-checked here.
    pub async fn resolve_user(&self, token: Option<&str>) -> AppResult<String> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                debug!("Request carries no session token");
                AppError::unauthorized(UNAUTHORIZED_MESSAGE)
            })?;

        match self.sessions.lookup(token).await? {
            Some(user_id) => Ok(user_id),
            None => {
                debug!("Session token not bound to any user");
                Err(AppError::unauthorized(UNAUTHORIZED_MESSAGE))
            }
        }
    }
}
