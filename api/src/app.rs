//! Application factory
//!
//! Builds the Actix-web application around an already wired `AppState`.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use otp_core::repositories::OtpCacheRepository;
use otp_core::services::otp::OtpGenerator;
use otp_shared::{error_codes, ApiResponse};

use crate::handlers::error::json_error_handler;
use crate::routes::health::health_check;
use crate::routes::otp::{generate, validate, AppState};

/// Create and configure the application with all dependencies
///
/// `max_payload_size` bounds JSON request bodies in bytes.
pub fn create_app<R, G>(
    app_state: web::Data<AppState<R, G>>,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: OtpCacheRepository + 'static,
    G: OtpGenerator + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        // Per-request span with a request id
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check::<R, G>))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/otp")
                        .route("/generate", web::post().to(generate::<R, G>))
                        .route("/validate", web::post().to(validate::<R, G>)),
                )
                .route("/", web::get().to(api_documentation)),
        )
        .default_service(web::route().to(not_found))
}

/// API documentation endpoint
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "OTP Service API v1",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": {
                "path": "/health",
                "method": "GET",
                "responses": {
                    "200": "Cache reachable",
                    "503": "Cache unreachable or unexpected ping reply"
                }
            },
            "otp": {
                "generate": {
                    "path": "/api/v1/otp/generate",
                    "method": "POST",
                    "description": "Issue a one-time password for an email address",
                    "request_body": {
                        "email": "string (email address)"
                    },
                    "responses": {
                        "200": "Code issued, returned in data.otp",
                        "400": "Malformed body or invalid email",
                        "500": "Cache unavailable"
                    }
                },
                "validate": {
                    "path": "/api/v1/otp/validate",
                    "method": "POST",
                    "description": "Check a one-time password and consume it on success",
                    "request_body": {
                        "key": "string (email address, alias: email)",
                        "otp": "string"
                    },
                    "responses": {
                        "200": "OTP is valid",
                        "400": "Invalid or expired OTP, or malformed body",
                        "500": "Cache unavailable"
                    }
                }
            }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
