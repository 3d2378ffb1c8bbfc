//! In-memory implementation of `OtpCacheRepository`
//!
//! Used by unit tests and the HTTP tests. Entries never expire on their own;
//! `expire` simulates the store dropping a key at the end of its TTL.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::CacheError;

use super::r#trait::OtpCacheRepository;

/// Mock cache repository for testing
pub struct InMemoryOtpCacheRepository {
    entries: Arc<RwLock<HashMap<String, String>>>,
    ping_reply: Arc<RwLock<Option<String>>>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
    fail_deletes: AtomicBool,
    fail_pings: AtomicBool,
}

impl InMemoryOtpCacheRepository {
    /// Create a new, healthy repository
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ping_reply: Arc::new(RwLock::new(Some("PONG".to_string()))),
            fail_writes: AtomicBool::new(false),
            fail_reads: AtomicBool::new(false),
            fail_deletes: AtomicBool::new(false),
            fail_pings: AtomicBool::new(false),
        }
    }

    /// Make every operation fail, as if the store were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.fail_writes.store(unavailable, Ordering::SeqCst);
        self.fail_reads.store(unavailable, Ordering::SeqCst);
        self.fail_deletes.store(unavailable, Ordering::SeqCst);
        self.fail_pings.store(unavailable, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    /// Override the reply returned by `ping`; `None` simulates an empty reply
    pub async fn set_ping_reply(&self, reply: Option<&str>) {
        *self.ping_reply.write().await = reply.map(str::to_string);
    }

    /// Drop a key as the store would when its TTL elapses
    pub async fn expire(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    /// Snapshot of the stored code for `key`, bypassing failure switches
    pub async fn stored(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    /// Number of live entries
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for InMemoryOtpCacheRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn unavailable() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "cache unavailable")
}

#[async_trait]
impl OtpCacheRepository for InMemoryOtpCacheRepository {
    async fn put(&self, key: &str, code: &str) -> Result<(), CacheError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CacheError::write(unavailable()));
        }
        self.entries
            .write()
            .await
            .insert(key.to_string(), code.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CacheError::read(unavailable()));
        }
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn remove(&self, key: &str) -> Result<(), CacheError> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(CacheError::delete(unavailable()));
        }
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn ping(&self) -> Result<String, CacheError> {
        if self.fail_pings.load(Ordering::SeqCst) {
            return Err(CacheError::ping(unavailable()));
        }
        self.ping_reply
            .read()
            .await
            .clone()
            .ok_or_else(|| CacheError::ping("Received empty ping response"))
    }
}
