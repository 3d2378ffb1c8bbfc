//! Shared error codes used in API responses

/// Common error codes used across the application
pub mod error_codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const OTP_INVALID: &str = "OTP_INVALID";
    pub const CACHE_UNAVAILABLE: &str = "CACHE_UNAVAILABLE";
}
