//! Liveness endpoint backed by a cache ping

use actix_web::{web, HttpResponse};

use otp_core::repositories::OtpCacheRepository;
use otp_core::services::otp::OtpGenerator;

use crate::routes::otp::AppState;

/// Handler for GET /health
///
/// 200 with `{"status": "UP", ...}` when the cache answers `PONG`,
/// 503 with `{"status": "DOWN", ...}` otherwise.
pub async fn health_check<R, G>(state: web::Data<AppState<R, G>>) -> HttpResponse
where
    R: OtpCacheRepository + 'static,
    G: OtpGenerator + 'static,
{
    let report = state.health.health().await;

    if report.is_up() {
        HttpResponse::Ok().json(report)
    } else {
        HttpResponse::ServiceUnavailable().json(report)
    }
}
