pub mod otp;

pub use otp::OtpCacheRepository;
pub use otp::mock::InMemoryOtpCacheRepository;
