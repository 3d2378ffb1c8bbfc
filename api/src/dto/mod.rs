pub mod otp;

pub use otp::{GenerateOtpRequest, GenerateOtpResponse, ValidateOtpRequest, ValidateOtpResponse};
