//! Error mapping of the Redis-backed repository, against a local stub
//! server that answers every command with a fixed RESP reply

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use otp_core::errors::CacheError;
use otp_core::repositories::OtpCacheRepository;
use otp_shared::config::{CacheConfig, OtpConfig};

use crate::cache::{RedisClient, RedisOtpCacheRepository};

/// Start a stub that sends `reply` once per command received
async fn stub_server(reply: &'static [u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let mut at_line_start = true;
                loop {
                    let n = match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => n,
                    };
                    // Each command is a RESP array starting with '*' on a new line
                    let mut commands = 0;
                    for &byte in &buf[..n] {
                        if at_line_start && byte == b'*' {
                            commands += 1;
                        }
                        at_line_start = byte == b'\n';
                    }
                    for _ in 0..commands {
                        if socket.write_all(reply).await.is_err() {
                            return;
                        }
                    }
                }
            });
        }
    });

    format!("redis://{}", addr)
}

async fn repository_against(reply: &'static [u8]) -> RedisOtpCacheRepository {
    let mut config = CacheConfig::new(stub_server(reply).await).with_prefix("otp");
    config.connection_timeout = 2;

    let client = RedisClient::new(config).await.unwrap();
    RedisOtpCacheRepository::new(client, &OtpConfig::new(300))
}

#[tokio::test]
async fn test_store_faults_map_to_cache_error_variants() {
    let repo = repository_against(b"-ERR store unavailable\r\n").await;

    let err = repo.put("a@x.com", "123456").await.unwrap_err();
    assert!(matches!(err, CacheError::Write(_)));
    assert_eq!(err.to_string(), "Error while saving to cache");
    assert!(err.detailed_message().contains("store unavailable"));

    let err = repo.get("a@x.com").await.unwrap_err();
    assert!(matches!(err, CacheError::Read(_)));
    assert_eq!(err.to_string(), "Error while retrieving from the cache");

    let err = repo.remove("a@x.com").await.unwrap_err();
    assert!(matches!(err, CacheError::Delete(_)));
    assert_eq!(err.to_string(), "Error while removing from the cache");

    let err = repo.ping().await.unwrap_err();
    assert!(matches!(err, CacheError::Ping(_)));
    assert_eq!(err.to_string(), "Error while pinging the cache");
}

#[tokio::test]
async fn test_empty_ping_reply_is_ping_error() {
    let repo = repository_against(b"$0\r\n\r\n").await;

    let err = repo.ping().await.unwrap_err();
    assert!(matches!(err, CacheError::Ping(_)));
    assert!(err.detailed_message().contains("empty ping response"));
}

#[tokio::test]
async fn test_ping_reply_is_passed_through() {
    let repo = repository_against(b"+PONG\r\n").await;
    assert_eq!(repo.ping().await.unwrap(), "PONG");
}
