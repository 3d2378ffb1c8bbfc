//! # Infrastructure Layer
//!
//! Concrete adapters for the OTP service's external collaborators.
//!
//! ## Architecture
//!
//! - **Cache**: a Redis client wrapping the driver's auto-reconnecting
//!   connection manager, and the `OtpCacheRepository` implementation built
//!   on top of it

/// Cache module - Redis client and the OTP cache repository
pub mod cache;

pub use cache::{RedisClient, RedisOtpCacheRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection could not be established in time
    #[error("Timeout: {0}")]
    Timeout(String),
}
