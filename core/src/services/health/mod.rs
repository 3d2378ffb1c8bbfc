//! Cache health probe
//!
//! Reports the cache as `UP` only when it answers a ping with `PONG`.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use otp_shared::HealthStatus;
use serde::Serialize;

use crate::repositories::OtpCacheRepository;


/// Detail key set when the cache answered
pub const CACHE_DETAIL: &str = "cache";
/// Detail key set when the ping failed
pub const ERROR_DETAIL: &str = "error";

/// Outcome of a health probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub details: BTreeMap<String, String>,
    pub checked_at: DateTime<Utc>,
}

impl HealthReport {
    fn new(status: HealthStatus, key: &str, value: impl Into<String>) -> Self {
        let mut details = BTreeMap::new();
        details.insert(key.to_string(), value.into());
        Self {
            status,
            details,
            checked_at: Utc::now(),
        }
    }

    pub fn is_up(&self) -> bool {
        self.status.is_up()
    }
}

/// Ping the cache and classify the reply
pub async fn check_cache<R: OtpCacheRepository + ?Sized>(repository: &R) -> HealthReport {
    match repository.ping().await {
        Ok(reply) if reply.eq_ignore_ascii_case("PONG") => {
            HealthReport::new(HealthStatus::Up, CACHE_DETAIL, "Available")
        }
        Ok(reply) => {
            tracing::warn!(reply = %reply, event = "cache_health_unexpected", "Unexpected ping reply");
            HealthReport::new(
                HealthStatus::Down,
                CACHE_DETAIL,
                format!("Unexpected response: {}", reply),
            )
        }
        Err(e) => {
            tracing::error!(error = %e.detailed_message(), event = "cache_health_failed", "Cache ping failed");
            HealthReport::new(HealthStatus::Down, ERROR_DETAIL, e.detailed_message())
        }
    }
}

/// Health indicator bound to a shared repository
pub struct CacheHealthIndicator<R: OtpCacheRepository> {
    repository: Arc<R>,
}

impl<R: OtpCacheRepository> CacheHealthIndicator<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn health(&self) -> HealthReport {
        check_cache(self.repository.as_ref()).await
    }
}
