//! Redis cache client implementation
//!
//! Thin async wrapper over `redis::aio::ConnectionManager`. The manager
//! multiplexes commands over one connection and reconnects on its own after
//! a dropped link, so no retry loop lives here: a failed command is reported
//! to the caller once.

use std::time::Duration;

use redis::{aio::ConnectionManager, Client, ConnectionInfo, IntoConnectionInfo};
use tracing::{debug, error, info};

use otp_shared::config::CacheConfig;
use otp_shared::mask_identifier;

use crate::InfrastructureError;

/// Redis cache client
///
/// Cheap to clone; clones share the underlying connection manager.
#[derive(Clone)]
pub struct RedisClient {
    /// Auto-reconnecting connection for async operations
    connection: ConnectionManager,
    /// Configuration used to create this client
    config: CacheConfig,
    /// Logical database selected on connect
    database: i64,
}

impl RedisClient {
    /// Connect to Redis
    ///
    /// # Arguments
    /// * `config` - Cache configuration settings
    ///
    /// # Returns
    /// * `Ok(RedisClient)` - Connected client
    /// * `Err(InfrastructureError::Config)` - The URL could not be parsed
    /// * `Err(InfrastructureError::Timeout)` - No connection within `connection_timeout`
    /// * `Err(InfrastructureError::Cache)` - The server refused the connection
    pub async fn new(config: CacheConfig) -> Result<Self, InfrastructureError> {
        info!(
            url = %mask_url(&config.url),
            timeout_secs = config.connection_timeout,
            "Creating Redis client"
        );

        let info = connection_info(&config)?;
        let database = info.redis.db;
        let client = Client::open(info).map_err(|e| {
            error!(error = %e, "Failed to open Redis client");
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let timeout = Duration::from_secs(config.connection_timeout);
        let connection = tokio::time::timeout(timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| {
                error!(url = %mask_url(&config.url), "Timed out connecting to Redis");
                InfrastructureError::Timeout(format!(
                    "no connection to {} within {}s",
                    mask_url(&config.url),
                    config.connection_timeout
                ))
            })?
            .map_err(|e| {
                error!(error = %e, "Failed to connect to Redis");
                InfrastructureError::Cache(e)
            })?;

        info!(database, "Redis client created successfully");

        Ok(Self {
            connection,
            config,
            database,
        })
    }

    /// Configuration the client was built from
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Logical database the connection selected
    pub fn database(&self) -> i64 {
        self.database
    }

    /// Set a value with expiration time (`SET key value EX seconds`)
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        debug!(key = %masked_key(key), expiry_seconds, "Setting key with expiry");

        let mut conn = self.connection.clone();
        redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EX")
            .arg(expiry_seconds)
            .query_async::<_, ()>(&mut conn)
            .await
            .map_err(|e| {
                error!(key = %masked_key(key), error = %e, "Failed to set key");
                InfrastructureError::Cache(e)
            })
    }

    /// Get a value, `None` when the key is absent or expired
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        debug!(key = %masked_key(key), "Getting key");

        let mut conn = self.connection.clone();
        let value = redis::cmd("GET")
            .arg(key)
            .query_async::<_, Option<String>>(&mut conn)
            .await
            .map_err(|e| {
                error!(key = %masked_key(key), error = %e, "Failed to get key");
                InfrastructureError::Cache(e)
            })?;

        if value.is_none() {
            debug!(key = %masked_key(key), "Key not found");
        }
        Ok(value)
    }

    /// Delete a key
    ///
    /// # Returns
    /// * `Ok(true)` if a key was removed, `Ok(false)` if it did not exist
    pub async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        debug!(key = %masked_key(key), "Deleting key");

        let mut conn = self.connection.clone();
        let deleted = redis::cmd("DEL")
            .arg(key)
            .query_async::<_, u32>(&mut conn)
            .await
            .map_err(|e| {
                error!(key = %masked_key(key), error = %e, "Failed to delete key");
                InfrastructureError::Cache(e)
            })?;

        Ok(deleted > 0)
    }

    /// Send `PING` and return the raw reply
    pub async fn ping(&self) -> Result<String, InfrastructureError> {
        let mut conn = self.connection.clone();
        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .map_err(|e| {
                error!(error = %e, "Redis ping failed");
                InfrastructureError::Cache(e)
            })
    }

    /// Remaining time-to-live of a key
    ///
    /// # Returns
    /// * `Ok(Some(secs))` - Key exists with an expiry
    /// * `Ok(None)` - Key is missing or has no expiry
    pub async fn ttl(&self, key: &str) -> Result<Option<i64>, InfrastructureError> {
        let mut conn = self.connection.clone();
        let ttl = redis::cmd("TTL")
            .arg(key)
            .query_async::<_, i64>(&mut conn)
            .await
            .map_err(|e| {
                error!(key = %masked_key(key), error = %e, "Failed to get TTL");
                InfrastructureError::Cache(e)
            })?;

        Ok((ttl >= 0).then_some(ttl))
    }
}

/// Parse the configured URL into the connection parameters used on connect
///
/// The database selected on connect is the one in the URL path.
pub(crate) fn connection_info(config: &CacheConfig) -> Result<ConnectionInfo, InfrastructureError> {
    config.url.as_str().into_connection_info().map_err(|e| {
        error!(url = %mask_url(&config.url), error = %e, "Failed to parse Redis URL");
        InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
    })
}

/// Cache keys end in the caller's identifier
pub(crate) fn masked_key(key: &str) -> String {
    mask_identifier(key)
}

/// Hide the credentials part of a Redis URL for logging
pub(crate) fn mask_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(proto_end), Some(at_pos)) if at_pos > proto_end => {
            format!("{}****{}", &url[..proto_end + 3], &url[at_pos..])
        }
        _ => url.to_string(),
    }
}
