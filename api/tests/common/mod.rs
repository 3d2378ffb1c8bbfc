//! Shared fixtures for HTTP tests

use std::sync::Arc;

use actix_web::web;
use otp_api::routes::otp::AppState;
use otp_core::repositories::InMemoryOtpCacheRepository;
use otp_core::services::otp::{OtpGenerator, OtpService, OtpServiceConfig};

pub const MAX_PAYLOAD: usize = 16 * 1024;

pub fn app_state<G: OtpGenerator>(
    generator: G,
) -> (
    web::Data<AppState<InMemoryOtpCacheRepository, G>>,
    Arc<InMemoryOtpCacheRepository>,
) {
    let repository = Arc::new(InMemoryOtpCacheRepository::new());
    let service = Arc::new(OtpService::new(
        repository.clone(),
        Arc::new(generator),
        OtpServiceConfig { ttl_seconds: 300 },
    ));
    (web::Data::new(AppState::new(service)), repository)
}
