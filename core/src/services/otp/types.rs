//! Types for OTP service results

use serde::Serialize;

/// Message reported for any failed validation
///
/// Wrong and expired codes share it so callers cannot learn whether a code
/// was ever issued.
pub const INVALID_OTP_MESSAGE: &str = "Invalid or expired OTP";

/// Result of validating a submitted code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateOtpResult {
    /// Whether the submitted code matched the stored one
    pub success: bool,
    /// Error message if validation failed
    pub error_message: Option<String>,
}

impl ValidateOtpResult {
    pub fn valid() -> Self {
        Self {
            success: true,
            error_message: None,
        }
    }

    pub fn invalid() -> Self {
        Self {
            success: false,
            error_message: Some(INVALID_OTP_MESSAGE.to_string()),
        }
    }
}
