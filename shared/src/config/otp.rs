//! One-time password configuration module

use serde::{Deserialize, Serialize};

/// OTP issuance configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Lifetime of a stored code in seconds
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
        }
    }
}

impl OtpConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let ttl_seconds = lookup("OTP_TTL_SECONDS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|ttl| *ttl > 0)
            .unwrap_or_else(default_ttl_seconds);

        Self { ttl_seconds }
    }

    pub fn new(ttl_seconds: u64) -> Self {
        Self { ttl_seconds }
    }
}

fn default_ttl_seconds() -> u64 {
    300  // 5 minutes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl() {
        assert_eq!(OtpConfig::default().ttl_seconds, 300);
    }

    #[test]
    fn test_ttl_from_lookup() {
        let config = OtpConfig::from_lookup(|key| {
            (key == "OTP_TTL_SECONDS").then(|| "120".to_string())
        });
        assert_eq!(config.ttl_seconds, 120);
    }

    #[test]
    fn test_zero_or_garbage_ttl_falls_back() {
        let zero = OtpConfig::from_lookup(|_| Some("0".to_string()));
        assert_eq!(zero.ttl_seconds, 300);

        let garbage = OtpConfig::from_lookup(|_| Some("soon".to_string()));
        assert_eq!(garbage.ttl_seconds, 300);
    }
}
