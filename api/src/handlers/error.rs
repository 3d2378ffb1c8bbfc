//! Mapping of failures to HTTP responses
//!
//! Causes are logged here and never echoed to the client.

use actix_web::{error::InternalError, error::JsonPayloadError, HttpRequest, HttpResponse};
use validator::ValidationErrors;

use otp_core::errors::DomainError;
use otp_shared::{error_codes, ApiResponse};

/// Generic message returned for every server-side fault
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError, request_id: &str) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            tracing::warn!(request_id, error = %message, "Rejected request");
            HttpResponse::BadRequest().json(
                ApiResponse::<()>::error(error_codes::VALIDATION_ERROR, message)
                    .with_request_id(request_id),
            )
        }
        DomainError::Cache(cache_error) => {
            tracing::error!(
                request_id,
                operation = cache_error.operation(),
                error = %cache_error.detailed_message(),
                "Cache failure while handling request"
            );
            HttpResponse::InternalServerError().json(
                ApiResponse::<()>::error(error_codes::CACHE_UNAVAILABLE, INTERNAL_ERROR_MESSAGE)
                    .with_request_id(request_id),
            )
        }
    }
}

/// 400 response for a body that parsed but failed field validation
pub fn validation_error_response(errors: &ValidationErrors, request_id: &str) -> HttpResponse {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    tracing::warn!(request_id, fields = ?fields, "Request failed validation");

    HttpResponse::BadRequest().json(
        ApiResponse::<()>::error(
            error_codes::VALIDATION_ERROR,
            format!("Invalid request: {}", fields.join(", ")),
        )
        .with_request_id(request_id),
    )
}

/// Turn JSON extraction failures (bad syntax, missing fields, wrong content
/// type, oversize body) into a 400 with the usual envelope
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Malformed request body: {}", err);
    tracing::warn!(error = %err, "Rejected malformed JSON body");

    let response =
        HttpResponse::BadRequest().json(ApiResponse::<()>::error(error_codes::BAD_REQUEST, message));
    InternalError::from_response(err, response).into()
}
