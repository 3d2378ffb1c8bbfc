//! Integration tests for the generate and validate endpoints

mod common;

use actix_web::{http::header, test};
use serde_json::json;

use otp_api::app::create_app;
use otp_core::services::otp::{FixedOtpGenerator, SequentialOtpGenerator};

use common::{app_state, MAX_PAYLOAD};

#[actix_web::test]
async fn test_generate_returns_code_and_stores_it() {
    let (state, repo) = app_state(FixedOtpGenerator::new(123456));
    let app = test::init_service(create_app(state, MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/generate")
        .set_json(json!({ "email": "a@x.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["otp"], "123456");
    assert_eq!(body["data"]["message"], "OTP generated successfully");
    assert!(body["data"]["expires_in"].as_i64().unwrap() > 290);
    assert!(body["request_id"].is_string());

    assert_eq!(repo.stored("a@x.com").await, Some("123456".to_string()));
}

#[actix_web::test]
async fn test_generate_then_validate_then_replay() {
    let (state, repo) = app_state(FixedOtpGenerator::new(123456));
    let app = test::init_service(create_app(state, MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/generate")
        .set_json(json!({ "email": "a@x.com" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/validate")
        .set_json(json!({ "key": "a@x.com", "otp": "123456" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["message"], "OTP is valid");
    assert_eq!(repo.stored("a@x.com").await, None);

    // Second use of the same code
    let req = test::TestRequest::post()
        .uri("/api/v1/otp/validate")
        .set_json(json!({ "key": "a@x.com", "otp": "123456" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid or expired OTP");
    assert_eq!(body["code"], "OTP_INVALID");
}

#[actix_web::test]
async fn test_wrong_code_is_rejected_and_kept() {
    let (state, repo) = app_state(FixedOtpGenerator::new(123456));
    let app = test::init_service(create_app(state, MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/generate")
        .set_json(json!({ "email": "a@x.com" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/validate")
        .set_json(json!({ "email": "a@x.com", "otp": "000000" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    assert_eq!(repo.stored("a@x.com").await, Some("123456".to_string()));
}

#[actix_web::test]
async fn test_validate_unknown_identifier() {
    let (state, _) = app_state(FixedOtpGenerator::new(123456));
    let app = test::init_service(create_app(state, MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/validate")
        .set_json(json!({ "key": "nobody@x.com", "otp": "123456" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid or expired OTP");
}

#[actix_web::test]
async fn test_regenerate_invalidates_previous_code() {
    let (state, _) = app_state(SequentialOtpGenerator::new(100000));
    let app = test::init_service(create_app(state, MAX_PAYLOAD)).await;

    for expected in ["100000", "100001"] {
        let req = test::TestRequest::post()
            .uri("/api/v1/otp/generate")
            .set_json(json!({ "email": "a@x.com" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["otp"], expected);
    }

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/validate")
        .set_json(json!({ "key": "a@x.com", "otp": "100000" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/validate")
        .set_json(json!({ "key": "a@x.com", "otp": "100001" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);
}

#[actix_web::test]
async fn test_generate_rejects_invalid_email() {
    let (state, repo) = app_state(FixedOtpGenerator::new(123456));
    let app = test::init_service(create_app(state, MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/generate")
        .set_json(json!({ "email": "not-an-email" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(repo.is_empty().await);
}

#[actix_web::test]
async fn test_malformed_bodies_are_bad_requests() {
    let (state, _) = app_state(FixedOtpGenerator::new(123456));
    let app = test::init_service(create_app(state, MAX_PAYLOAD)).await;

    // Missing otp field
    let req = test::TestRequest::post()
        .uri("/api/v1/otp/validate")
        .set_json(json!({ "key": "a@x.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "BAD_REQUEST");

    // Not JSON at all
    let req = test::TestRequest::post()
        .uri("/api/v1/otp/generate")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{email")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}

#[actix_web::test]
async fn test_cache_failure_is_internal_error() {
    let (state, repo) = app_state(FixedOtpGenerator::new(123456));
    let app = test::init_service(create_app(state, MAX_PAYLOAD)).await;
    repo.set_unavailable(true);

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/generate")
        .set_json(json!({ "email": "a@x.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "An internal error occurred");
    // Cause stays in the logs
    assert!(!body.to_string().contains("cache unavailable"));

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/validate")
        .set_json(json!({ "key": "a@x.com", "otp": "123456" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 500);
}

#[actix_web::test]
async fn test_request_id_header_is_echoed() {
    let (state, _) = app_state(FixedOtpGenerator::new(123456));
    let app = test::init_service(create_app(state, MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/generate")
        .insert_header(("x-request-id", "req-42"))
        .set_json(json!({ "email": "a@x.com" }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["request_id"], "req-42");
}
