//! OTP cache repository module.

mod r#trait;
pub use r#trait::OtpCacheRepository;

pub mod mock;
pub use mock::InMemoryOtpCacheRepository;
