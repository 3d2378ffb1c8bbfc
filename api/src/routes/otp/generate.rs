use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use otp_core::repositories::OtpCacheRepository;
use otp_core::services::otp::OtpGenerator;
use otp_shared::{mask_identifier, ApiResponse};

use super::AppState;
use crate::dto::otp::{GenerateOtpRequest, GenerateOtpResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::routes::request_id;

/// Handler for POST /api/v1/otp/generate
///
/// Issues a fresh code for the email address, replacing any code still live
/// for it, and returns the code to the caller.
///
/// # Request Body
///
/// ```json
/// { "email": "a@x.com" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "data": {
///         "message": "OTP generated successfully",
///         "otp": "123456",
///         "expires_in": 300
///     },
///     "timestamp": "2025-08-14T10:00:00Z",
///     "request_id": "550e8400-e29b-41d4-a716-446655440000"
/// }
/// ```
///
/// ## Errors
/// - 400 when the body is malformed or the email is invalid
/// - 500 when the cache cannot store the code
pub async fn generate<R, G>(
    req: HttpRequest,
    state: web::Data<AppState<R, G>>,
    request: web::Json<GenerateOtpRequest>,
) -> HttpResponse
where
    R: OtpCacheRepository + 'static,
    G: OtpGenerator + 'static,
{
    let request_id = request_id(&req);

    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, &request_id);
    }

    tracing::info!(
        request_id = %request_id,
        identifier = %mask_identifier(&request.email),
        "Processing generate request"
    );

    match state.otp_service.generate(&request.email).await {
        Ok(otp) => {
            let response = GenerateOtpResponse {
                message: "OTP generated successfully".to_string(),
                expires_in: otp.expires_in_seconds(),
                otp: otp.code,
            };
            HttpResponse::Ok().json(ApiResponse::success(response).with_request_id(request_id))
        }
        Err(e) => handle_domain_error(e, &request_id),
    }
}
