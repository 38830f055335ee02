//! Read side of the shared key/value cache.

use async_trait::async_trait;

use crate::result::AppResult;

/// A key/value cache that other services write and FileShelf only reads.
///
/// Values are plain strings. Expiry is the backend's job, so an expired
/// entry simply reads as absent.
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Read the value under `key`, or `None` when it is absent or expired.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Whether the backend answers.
    async fn health_check(&self) -> AppResult<bool>;
}
