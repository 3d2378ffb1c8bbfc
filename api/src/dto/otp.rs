use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateOtpRequest {
    /// Address the code is issued for; also the cache key
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ValidateOtpRequest {
    /// Identifier the code was issued for
    #[serde(alias = "email")]
    #[validate(email)]
    pub key: String,

    /// Submitted code, compared verbatim
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOtpResponse {
    pub message: String,
    pub otp: String,
    pub expires_in: i64, // seconds until the cache drops the code
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOtpResponse {
    pub message: String,
}
