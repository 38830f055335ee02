//! Reads against the shared Redis instance.

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::trace;

use fileshelf_core::error::{AppError, ErrorKind};
use fileshelf_core::result::AppResult;
use fileshelf_core::traits::cache::CacheProvider;

use super::client::RedisClient;

/// Cache provider over the Redis instance the Auth Service writes to.
#[derive(Debug, Clone)]
pub struct RedisCacheProvider {
    client: RedisClient,
}

impl RedisCacheProvider {
    /// Wrap a connected client.
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

fn cache_error(command: &'static str) -> impl FnOnce(redis::RedisError) -> AppError {
    move |e| AppError::with_source(ErrorKind::Cache, format!("Redis {command} failed: {e}"), e)
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let value: Option<String> = conn.get(&key).await.map_err(cache_error("GET"))?;
        trace!(hit = value.is_some(), "Redis GET");
        Ok(value)
    }

    async fn health_check(&self) -> AppResult<bool> {
        let mut conn = self.client.conn_mut();
        let reply: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(cache_error("PING"))?;
        Ok(reply == "PONG")
    }
}
