//! Main OTP service implementation

use std::sync::Arc;

use constant_time_eq::constant_time_eq;
use otp_shared::mask_identifier;

use crate::domain::entities::otp_code::OtpCode;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::OtpCacheRepository;

use super::config::OtpServiceConfig;
use super::generator::OtpGenerator;
use super::types::ValidateOtpResult;

/// OTP service issuing codes into and validating them against the cache
///
/// Holds no mutable state of its own. Concurrent generate calls for the
/// same identifier race at the store, last write wins.
pub struct OtpService<R: OtpCacheRepository, G: OtpGenerator> {
    /// Cache repository holding live codes
    repository: Arc<R>,
    /// Code generator
    generator: Arc<G>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<R: OtpCacheRepository, G: OtpGenerator> OtpService<R, G> {
    /// Create a new OTP service
    ///
    /// # Arguments
    ///
    /// * `repository` - Cache repository implementation
    /// * `generator` - Code generator implementation
    /// * `config` - Service configuration
    pub fn new(repository: Arc<R>, generator: Arc<G>, config: OtpServiceConfig) -> Self {
        Self {
            repository,
            generator,
            config,
        }
    }

    /// Issue a code for an identifier
    ///
    /// Any code already stored for the identifier is overwritten.
    ///
    /// # Returns
    ///
    /// * `Ok(OtpCode)` - The issued code
    /// * `Err(DomainError::Validation)` - Blank identifier
    /// * `Err(DomainError::Cache)` - The code could not be stored
    pub async fn generate(&self, identifier: &str) -> DomainResult<OtpCode> {
        Self::ensure_identifier(identifier)?;

        let otp = OtpCode::new(identifier, self.generator.generate(), self.config.ttl_seconds);

        self.repository
            .put(identifier, &otp.code)
            .await
            .map_err(|e| {
                tracing::error!(
                    identifier = %mask_identifier(identifier),
                    error = %e.detailed_message(),
                    event = "otp_storage_failed",
                    "Failed to store OTP in cache"
                );
                DomainError::from(e)
            })?;

        tracing::info!(
            identifier = %mask_identifier(identifier),
            ttl_seconds = self.config.ttl_seconds,
            event = "otp_generated",
            "Generated new OTP"
        );

        Ok(otp)
    }

    /// Validate a submitted code
    ///
    /// A match deletes the stored code. A mismatch leaves it in place until
    /// its TTL elapses or a correct attempt arrives. Absent, expired and
    /// wrong codes all yield the same failure.
    ///
    /// The read and the delete are separate cache commands, so two concurrent
    /// requests carrying the correct code can both pass before either one
    /// removes it. Single use holds only for requests that do not overlap.
    ///
    /// # Returns
    ///
    /// * `Ok(ValidateOtpResult)` - Pass or fail
    /// * `Err(DomainError::Validation)` - Blank identifier
    /// * `Err(DomainError::Cache)` - The cache could not be read or cleaned up
    pub async fn validate(
        &self,
        identifier: &str,
        submitted_code: &str,
    ) -> DomainResult<ValidateOtpResult> {
        Self::ensure_identifier(identifier)?;

        let stored = self.repository.get(identifier).await.map_err(|e| {
            tracing::error!(
                identifier = %mask_identifier(identifier),
                error = %e.detailed_message(),
                event = "otp_lookup_failed",
                "Failed to read OTP from cache"
            );
            DomainError::from(e)
        })?;

        let Some(stored) = stored else {
            tracing::warn!(
                identifier = %mask_identifier(identifier),
                event = "otp_validation_failed",
                "No live OTP for identifier"
            );
            return Ok(ValidateOtpResult::invalid());
        };

        if !constant_time_eq(stored.as_bytes(), submitted_code.as_bytes()) {
            tracing::warn!(
                identifier = %mask_identifier(identifier),
                event = "otp_validation_failed",
                "Submitted OTP does not match"
            );
            return Ok(ValidateOtpResult::invalid());
        }

        self.repository.remove(identifier).await.map_err(|e| {
            tracing::error!(
                identifier = %mask_identifier(identifier),
                error = %e.detailed_message(),
                event = "otp_removal_failed",
                "Failed to remove validated OTP from cache"
            );
            DomainError::from(e)
        })?;

        tracing::info!(
            identifier = %mask_identifier(identifier),
            event = "otp_validated",
            "OTP validated and removed"
        );

        Ok(ValidateOtpResult::valid())
    }

    /// Cache repository shared with the health check
    pub fn repository(&self) -> Arc<R> {
        Arc::clone(&self.repository)
    }

    /// Service configuration
    pub fn config(&self) -> &OtpServiceConfig {
        &self.config
    }

    fn ensure_identifier(identifier: &str) -> DomainResult<()> {
        if identifier.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "identifier must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
