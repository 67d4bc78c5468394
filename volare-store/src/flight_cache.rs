use async_trait::async_trait;
use redis::AsyncCommands;
use std::time::Duration;
use tracing::debug;

use volare_core::cache::{CacheError, SearchCache};

/// Redis-backed implementation of the search cache. Entries are written with
/// `SET ... EX`, so eviction is time-based only and overwrites are
/// last-write-wins.
#[derive(Clone)]
pub struct RedisSearchCache {
    client: redis::Client,
}

impl RedisSearchCache {
    pub fn new(connection_string: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(connection_string)
            .map_err(|e| CacheError::Backend(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl SearchCache for RedisSearchCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::Backend(e.to_string()))?;
        let value: Option<Vec<u8>> = conn
            .get(key)
            .await
            .map_err(|e| CacheError::Backend(e.to_string()))?;
        debug!(key, hit = value.is_some(), "search cache lookup");
        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::Backend(e.to_string()))?;
        conn.set_ex::<_, _, ()>(key, value, ttl.as_secs())
            .await
            .map_err(|e| CacheError::Backend(e.to_string()))?;
        debug!(key, ttl_seconds = ttl.as_secs(), "search cache populated");
        Ok(())
    }
}
