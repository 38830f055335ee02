//! Session lookups backed by the shared cache.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use fileshelf_cache::CacheManager;
use fileshelf_cache::keys;
use fileshelf_core::config::AuthConfig;
use fileshelf_core::result::AppResult;
use fileshelf_core::traits::cache::CacheProvider;
use fileshelf_core::traits::session::SessionLookup;

/// Reads the user id the Auth Service stored under `<prefix><token>`.
#[derive(Debug, Clone)]
pub struct CacheSessionLookup {
    /// Cache shared with the Auth Service.
    cache: Arc<CacheManager>,
    /// Key prefix for session entries.
    key_prefix: String,
}

impl CacheSessionLookup {
    /// Creates a lookup reading keys with the given prefix.
    pub fn new(cache: Arc<CacheManager>, key_prefix: impl Into<String>) -> Self {
        Self {
            cache,
            key_prefix: key_prefix.into(),
        }
    }

    /// Creates a lookup using the configured key prefix.
    pub fn from_config(cache: Arc<CacheManager>, config: &AuthConfig) -> Self {
        Self::new(cache, config.token_key_prefix.clone())
    }
}

#[async_trait]
impl SessionLookup for CacheSessionLookup {
    async fn lookup(&self, token: &str) -> AppResult<Option<String>> {
        let key = keys::session_token(&self.key_prefix, token);
        let user_id = self.cache.get(&key).await?;
        debug!(found = user_id.is_some(), "Session token lookup");
        Ok(user_id)
    }
}
