use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;

use otp_api::app::create_app;
use otp_api::routes::otp::AppState;
use otp_api::telemetry::init_tracing;
use otp_core::services::otp::{OtpService, OtpServiceConfig, RandomOtpGenerator};
use otp_infra::cache::{RedisClient, RedisOtpCacheRepository};
use otp_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging)?;

    info!(
        environment = %config.environment,
        bind_address = %config.server.bind_address(),
        otp_ttl_seconds = config.otp.ttl_seconds,
        "Starting OTP service"
    );

    let redis = RedisClient::new(config.cache.clone())
        .await
        .context("failed to connect to Redis")?;

    let repository = Arc::new(RedisOtpCacheRepository::new(redis, &config.otp));
    let otp_service = Arc::new(OtpService::new(
        repository,
        Arc::new(RandomOtpGenerator::new()),
        OtpServiceConfig::from(&config.otp),
    ));
    let app_state = web::Data::new(AppState::new(otp_service));

    let max_payload_size = config.server.max_payload_size;
    let mut server = HttpServer::new(move || create_app(app_state.clone(), max_payload_size))
        .keep_alive(Duration::from_secs(config.server.keep_alive));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(config.server.bind_address())
        .with_context(|| format!("failed to bind {}", config.server.bind_address()))?
        .run()
        .await?;

    info!("OTP service stopped");
    Ok(())
}
