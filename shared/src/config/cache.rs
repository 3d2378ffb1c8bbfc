//! Cache configuration module

use serde::{Deserialize, Serialize};

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,
    
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
    
    /// Enable cache key prefix
    #[serde(default)]
    pub key_prefix: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            connection_timeout: default_connection_timeout(),
            key_prefix: None,
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup
    ///
    /// `REDIS_URL` wins when present and carries its own database in the
    /// path. Otherwise the URL is assembled from `REDIS_HOST`, `REDIS_PORT`,
    /// `REDIS_PASSWORD` and `REDIS_DATABASE`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = match lookup("REDIS_URL") {
            Some(url) if !url.trim().is_empty() => url,
            _ => {
                let database = lookup("REDIS_DATABASE")
                    .and_then(|v| v.parse::<u8>().ok())
                    .unwrap_or(0)
                    .min(15);
                let host = lookup("REDIS_HOST").unwrap_or_else(|| "localhost".to_string());
                let port = lookup("REDIS_PORT")
                    .and_then(|v| v.parse::<u16>().ok())
                    .unwrap_or(6379);
                let password = lookup("REDIS_PASSWORD").filter(|p| !p.is_empty());
                Self::build_url(&host, port, password.as_deref(), database)
            }
        };

        let connection_timeout = lookup("REDIS_CONNECTION_TIMEOUT")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_connection_timeout);

        Self {
            url,
            connection_timeout,
            key_prefix: lookup("REDIS_KEY_PREFIX").filter(|p| !p.is_empty()),
        }
    }
    
    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Assemble a `redis://` URL from its parts
    pub fn build_url(host: &str, port: u16, password: Option<&str>, database: u8) -> String {
        let auth = match password {
            Some(password) => format!(":{}@", password),
            None => String::new(),
        };
        if database == 0 {
            format!("redis://{}{}:{}", auth, host, port)
        } else {
            format!("redis://{}{}:{}/{}", auth, host, port, database)
        }
    }
    
    /// Set the key prefix for all cache keys
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }
    
    /// Generate a cache key with prefix
    pub fn make_key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}

fn default_connection_timeout() -> u64 {
    5
}
