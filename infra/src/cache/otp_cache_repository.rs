//! Redis-backed implementation of `OtpCacheRepository`
//!
//! Each code is a plain Redis string under `CacheConfig::make_key(identifier)`
//! with the OTP lifetime as its `EX` expiry. Expiry is left to Redis.

use async_trait::async_trait;

use otp_core::errors::CacheError;
use otp_core::repositories::OtpCacheRepository;
use otp_shared::config::{CacheConfig, OtpConfig};

use super::redis_client::RedisClient;

/// OTP cache repository over a shared `RedisClient`
#[derive(Clone)]
pub struct RedisOtpCacheRepository {
    client: RedisClient,
    cache_config: CacheConfig,
    ttl_seconds: u64,
}

impl RedisOtpCacheRepository {
    /// Create a repository storing codes for `otp_config.ttl_seconds`
    pub fn new(client: RedisClient, otp_config: &OtpConfig) -> Self {
        Self {
            cache_config: client.config().clone(),
            client,
            ttl_seconds: otp_config.ttl_seconds,
        }
    }

    /// Redis key a code for `identifier` is stored under
    pub fn key_for(&self, identifier: &str) -> String {
        self.cache_config.make_key(identifier)
    }

    /// Underlying client
    pub fn client(&self) -> &RedisClient {
        &self.client
    }
}

#[async_trait]
impl OtpCacheRepository for RedisOtpCacheRepository {
    async fn put(&self, key: &str, code: &str) -> Result<(), CacheError> {
        self.client
            .set_with_expiry(&self.key_for(key), code, self.ttl_seconds)
            .await
            .map_err(CacheError::write)
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.client
            .get(&self.key_for(key))
            .await
            .map_err(CacheError::read)
    }

    async fn remove(&self, key: &str) -> Result<(), CacheError> {
        self.client
            .delete(&self.key_for(key))
            .await
            .map(|_| ())
            .map_err(CacheError::delete)
    }

    async fn ping(&self) -> Result<String, CacheError> {
        let reply = self.client.ping().await.map_err(CacheError::ping)?;
        if reply.is_empty() {
            return Err(CacheError::ping("Received empty ping response"));
        }
        Ok(reply)
    }
}
