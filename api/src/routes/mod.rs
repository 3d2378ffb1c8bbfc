//! Route handlers

pub mod health;
pub mod otp;

use actix_web::HttpRequest;
use uuid::Uuid;

/// Header a caller may use to supply its own correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Caller-supplied request id, or a fresh v4 UUID
pub(crate) fn request_id(req: &HttpRequest) -> String {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
