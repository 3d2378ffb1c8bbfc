//! Domain-specific error types and error handling.

mod types;


pub use types::{BoxError, CacheError};

use thiserror::Error;

/// Core domain errors (general purpose)
///
/// A wrong or expired OTP is not an error; it is reported through
/// `ValidateOtpResult`.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },
    
    // Bridge to cache faults
    #[error(transparent)]
    Cache(#[from] CacheError),
}

impl DomainError {
    /// Whether the error stems from the caller's input rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(self, DomainError::Validation { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
