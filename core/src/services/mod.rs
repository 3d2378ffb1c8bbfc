//! Business services containing domain logic and use cases.

pub mod health;
pub mod otp;

// Re-export commonly used types
pub use health::{check_cache, CacheHealthIndicator, HealthReport};
pub use otp::{
    OtpGenerator, OtpService, OtpServiceConfig, RandomOtpGenerator, ValidateOtpResult,
};
