//! OTP route handlers
//!
//! - `POST /api/v1/otp/generate` issues a code for an email address
//! - `POST /api/v1/otp/validate` checks a submitted code and consumes it on match

pub mod generate;
pub mod validate;

use std::sync::Arc;

use otp_core::repositories::OtpCacheRepository;
use otp_core::services::health::CacheHealthIndicator;
use otp_core::services::otp::{OtpGenerator, OtpService};

pub use generate::generate;
pub use validate::validate;

/// Application state that holds shared services
pub struct AppState<R, G>
where
    R: OtpCacheRepository,
    G: OtpGenerator,
{
    pub otp_service: Arc<OtpService<R, G>>,
    pub health: Arc<CacheHealthIndicator<R>>,
}

impl<R, G> AppState<R, G>
where
    R: OtpCacheRepository,
    G: OtpGenerator,
{
    /// Build state with a health probe over the service's own repository
    pub fn new(otp_service: Arc<OtpService<R, G>>) -> Self {
        let health = Arc::new(CacheHealthIndicator::new(otp_service.repository()));
        Self { otp_service, health }
    }
}
