//! # OTP Core
//! 
//! Core business logic and domain layer for the OTP service.
//! This crate contains the OTP entity, the cache repository contract,
//! the code generator, the issuance/validation service and the error
//! taxonomy shared by the infrastructure and HTTP layers.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::{InMemoryOtpCacheRepository, OtpCacheRepository};
pub use services::{
    check_cache, CacheHealthIndicator, HealthReport, OtpGenerator, OtpService,
    OtpServiceConfig, RandomOtpGenerator, ValidateOtpResult,
};
