//! Session lookup trait for the external Auth Service.

use async_trait::async_trait;

use crate::result::AppResult;

/// Maps a session token to the identifier of the user it is bound to.
///
/// Minting and expiring tokens belongs to the Auth Service; this crate
/// only ever reads the binding.
#[async_trait]
pub trait SessionLookup: Send + Sync + std::fmt::Debug + 'static {
    /// Returns the raw user identifier bound to `token`, or `None` when no
    /// session exists for it. The identifier is returned unvalidated.
    async fn lookup(&self, token: &str) -> AppResult<Option<String>>;
}
