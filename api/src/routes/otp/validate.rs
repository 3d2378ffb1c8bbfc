use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use otp_core::repositories::OtpCacheRepository;
use otp_core::services::otp::{OtpGenerator, INVALID_OTP_MESSAGE};
use otp_shared::{error_codes, mask_identifier, ApiResponse};

use super::AppState;
use crate::dto::otp::{ValidateOtpRequest, ValidateOtpResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::routes::request_id;

/// Handler for POST /api/v1/otp/validate
///
/// # Request Body
///
/// ```json
/// { "key": "a@x.com", "otp": "123456" }
/// ```
///
/// `"email"` is accepted in place of `"key"`.
///
/// # Response
///
/// - 200 `{"success": true, "data": {"message": "OTP is valid"}}`; the code
///   is consumed
/// - 400 `{"success": false, "error": "Invalid or expired OTP"}` for a wrong,
///   expired or never-issued code
/// - 400 for a malformed body
/// - 500 when the cache cannot be read or the consumed code cannot be removed
pub async fn validate<R, G>(
    req: HttpRequest,
    state: web::Data<AppState<R, G>>,
    request: web::Json<ValidateOtpRequest>,
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
        identifier = %mask_identifier(&request.key),
        "Processing validate request"
    );

    match state.otp_service.validate(&request.key, &request.otp).await {
        Ok(result) if result.success => HttpResponse::Ok().json(
            ApiResponse::success(ValidateOtpResponse {
                message: "OTP is valid".to_string(),
            })
            .with_request_id(request_id),
        ),
        Ok(result) => {
            let message = result
                .error_message
                .unwrap_or_else(|| INVALID_OTP_MESSAGE.to_string());
            HttpResponse::BadRequest().json(
                ApiResponse::<()>::error(error_codes::OTP_INVALID, message)
                    .with_request_id(request_id),
            )
        }
        Err(e) => handle_domain_error(e, &request_id),
    }
}
