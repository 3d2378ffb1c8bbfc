//! OTP service module
//!
//! This module provides the one-time password workflow:
//! - Numeric code generation
//! - Storing the code under the caller's identifier with a fixed TTL
//! - Compare-and-delete validation

mod config;
mod generator;
pub mod mock;
mod service;
mod types;


pub use config::OtpServiceConfig;
pub use generator::{OtpGenerator, RandomOtpGenerator, MAX_CODE, MIN_CODE};
pub use mock::{FixedOtpGenerator, SequentialOtpGenerator};
pub use service::OtpService;
pub use types::{ValidateOtpResult, INVALID_OTP_MESSAGE};
