//! Cache repository trait defining the interface for OTP storage.

use async_trait::async_trait;

use crate::errors::CacheError;

/// Repository trait for one-time passwords held in a TTL-keyed cache
///
/// Implementations delegate durability and expiry to the backing store. Every
/// store fault is wrapped in the matching `CacheError` variant with the
/// original cause attached.
#[async_trait]
pub trait OtpCacheRepository: Send + Sync {
    /// Store `code` under `key` with the repository's configured TTL
    ///
    /// Overwrites any code already stored under `key`.
    ///
    /// # Returns
    /// * `Ok(())` - Code stored and TTL applied
    /// * `Err(CacheError::Write)` - The store rejected the write
    async fn put(&self, key: &str, code: &str) -> Result<(), CacheError>;

    /// Fetch the code stored under `key`
    ///
    /// # Returns
    /// * `Ok(Some(code))` - Key exists and has not expired
    /// * `Ok(None)` - Key absent or expired
    /// * `Err(CacheError::Read)` - The store could not be read
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Delete the code stored under `key`; deleting an absent key succeeds
    ///
    /// # Returns
    /// * `Err(CacheError::Delete)` - The store rejected the delete
    async fn remove(&self, key: &str) -> Result<(), CacheError>;

    /// Liveness check against the store
    ///
    /// # Returns
    /// * `Ok(reply)` - The store's reply, `PONG` when healthy
    /// * `Err(CacheError::Ping)` - The store is unreachable or replied with nothing
    async fn ping(&self) -> Result<String, CacheError>;
}
