//! Cache module for Redis-based OTP storage
//!
//! Connection management and reconnection are the `redis` crate's
//! `ConnectionManager`; this module adds the OTP-specific key layout and
//! error mapping.

pub mod otp_cache_repository;
pub mod redis_client;

#[cfg(test)]
mod tests;

pub use otp_cache_repository::RedisOtpCacheRepository;
pub use redis_client::RedisClient;

// Re-export commonly used types
pub use otp_shared::config::CacheConfig;
