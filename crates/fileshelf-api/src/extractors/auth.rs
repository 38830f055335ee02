//! `SessionCredentials` extractor for the session token header.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use fileshelf_service::Credentials;

use crate::state::AppState;

/// Credentials presented by the caller.
///
/// Never rejects: a missing or unreadable header yields anonymous
/// credentials, and the services decide whether that is acceptable.
#[derive(Debug, Clone)]
pub struct SessionCredentials(pub Credentials);

impl std::ops::Deref for SessionCredentials {
    type Target = Credentials;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for SessionCredentials {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(state.config.auth.token_header.as_str())
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        Ok(Self(Credentials { token }))
    }
}
