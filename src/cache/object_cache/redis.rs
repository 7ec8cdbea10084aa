use async_trait::async_trait;
use redis::{AsyncCommands, aio::MultiplexedConnection};
use tracing::{debug, error};

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::errors::RatingsError;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("redis", RedisObjectCache);

pub struct RedisObjectCache {
    client: redis::Client,
    key_prefix: String,
    ttl: u64, // TTL in seconds
}

impl RedisObjectCache {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        let redis_config = &config.cache.redis;

        debug!(
            "RedisObjectCache created with prefix: '{}', TTL: {}s",
            redis_config.key_prefix, config.cache.default_ttl
        );

        let client = redis::Client::open(redis_config.url.clone())
            .map_err(|e| format!("Invalid Redis URL '{}': {e}", redis_config.url))?;

        // 启动时同步 PING 一次
        let mut conn = client.get_connection().map_err(|e| {
            error!(
                "Failed to connect to Redis server: {}. Check Redis server status and URL: {}",
                e, redis_config.url
            );
            format!("Redis connection failed: {e}")
        })?;
        let response: String = redis::cmd("PING").query(&mut conn).map_err(|e| {
            error!("Failed to ping Redis server: {}", e);
            format!("Redis ping failed: {e}")
        })?;
        debug!("Redis connection test successful: {}", response);

        Ok(Self {
            client,
            key_prefix: redis_config.key_prefix.clone(),
            ttl: config.cache.default_ttl,
        })
    }

    async fn get_connection(&self) -> Result<MultiplexedConnection, redis::RedisError> {
        self.client.get_multiplexed_async_connection().await
    }

    fn make_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl ObjectCache for RedisObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        let redis_key = self.make_key(key);

        let mut conn = match self.get_connection().await {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to get Redis connection: {}", e);
                return CacheResult::ExistsButNoValue;
            }
        };

        let result: redis::RedisResult<Option<String>> = conn.get(redis_key).await;

        match result {
            Ok(Some(data)) => {
                debug!("Successfully retrieved key: {}", key);
                CacheResult::Found(data)
            }
            Ok(None) => {
                debug!("Key not found in cache: {}", key);
                CacheResult::NotFound
            }
            Err(e) => {
                error!("Failed to get key '{}': {}", key, e);
                CacheResult::ExistsButNoValue
            }
        }
    }

    async fn insert_raw(
        &self,
        key: String,
        value: String,
        ttl: u64,
    ) -> crate::errors::Result<()> {
        let redis_key = self.make_key(&key);

        let mut conn = self.get_connection().await.map_err(|e| {
            error!("Failed to get Redis connection: {}", e);
            RatingsError::cache_connection(format!("Redis connection failed: {e}"))
        })?;

        let effective_ttl = if ttl == 0 { self.ttl } else { ttl };

        conn.set_ex::<String, String, ()>(redis_key, value, effective_ttl)
            .await
            .map_err(|e| {
                error!("Failed to insert key '{}' into cache: {}", key, e);
                RatingsError::cache_connection(format!("Redis SET failed for '{key}': {e}"))
            })?;

        debug!("Inserted key into cache: {} (TTL: {}s)", key, effective_ttl);
        Ok(())
    }

    async fn remove(&self, key: &str) {
        let redis_key = self.make_key(key);

        let mut conn = match self.get_connection().await {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to get Redis connection: {}", e);
                return;
            }
        };

        match conn.del::<String, i32>(redis_key).await {
            Ok(0) => debug!("Key not found in cache for removal: {}", key),
            Ok(_) => debug!("Successfully removed key from cache: {}", key),
            Err(e) => error!("Failed to remove key '{}': {}", key, e),
        }
    }
}
