//! Redis-based cache implementation.

use super::OrderCache;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use ordena_core::{OrdenaError, OrdenaResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Redis-backed order cache.
pub struct RedisOrderCache {
    /// Redis connection pool. `None` when the cache is disabled.
    pool: Option<Arc<Pool>>,
    /// Optional TTL for cached entries. `None` means entries never expire.
    ttl: Option<Duration>,
}

impl RedisOrderCache {
    /// Creates a new Redis cache over the given pool.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self {
            pool: Some(pool),
            ttl: None,
        }
    }

    /// Creates a cache whose entries expire after `ttl`.
    #[must_use]
    pub fn with_ttl(pool: Arc<Pool>, ttl: Option<Duration>) -> Self {
        Self {
            pool: Some(pool),
            ttl,
        }
    }

    /// Creates a no-op cache (for when Redis is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            pool: None,
            ttl: None,
        }
    }

    /// Gets a connection from the pool.
    async fn get_conn(&self) -> OrdenaResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool
                .get()
                .await
                .map_err(|e| OrdenaError::Cache(format!("Failed to get Redis connection: {e}"))),
            None => Err(OrdenaError::Cache("Cache is disabled".to_string())),
        }
    }
}

#[async_trait]
impl OrderCache for RedisOrderCache {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_raw(&self, key: &str) -> OrdenaResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| OrdenaError::Cache(format!("Failed to get key '{key}': {e}")))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str) -> OrdenaResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;

        match self.ttl {
            Some(ttl) => {
                let ttl_secs = ttl.as_secs().max(1);
                conn.set_ex::<_, _, ()>(key, value, ttl_secs)
                    .await
                    .map_err(|e| OrdenaError::Cache(format!("Failed to set key '{key}': {e}")))?;
                debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
            }
            None => {
                conn.set::<_, _, ()>(key, value)
                    .await
                    .map_err(|e| OrdenaError::Cache(format!("Failed to set key '{key}': {e}")))?;
                debug!("Cached key '{}'", key);
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for RedisOrderCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisOrderCache")
            .field("enabled", &self.is_enabled())
            .field("ttl", &self.ttl)
            .finish()
    }
}
