//! Shared utilities and common types for the OTP service
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Identifier masking for logs
//! - API response wrappers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, Environment, LoggingConfig, OtpConfig, ServerConfig,
};
pub use errors::error_codes;
pub use types::{ApiResponse, HealthStatus};
pub use utils::mask_identifier;
