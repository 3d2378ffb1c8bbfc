//! One-time password entity.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Number of digits in a rendered code
pub const CODE_LENGTH: usize = 6;

/// A freshly issued one-time password
///
/// Only the in-flight result of a generate call is ever materialized; the
/// durable copy lives in the cache as the plain string `code` under the
/// identifier key, and expiry there is enforced by the store's TTL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpCode {
    /// Identifier the code was issued for (an email address)
    pub identifier: String,
    
    /// The rendered numeric code
    pub code: String,
    
    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,
    
    /// Timestamp after which the cache will have dropped the code
    pub expires_at: DateTime<Utc>,
}

impl OtpCode {
    /// Creates a new code record expiring `ttl_seconds` from now
    pub fn new(identifier: impl Into<String>, code: u32, ttl_seconds: u64) -> Self {
        let now = Utc::now();
        let expires_at = i64::try_from(ttl_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        
        Self {
            identifier: identifier.into(),
            code: Self::format_code(code),
            created_at: now,
            expires_at,
        }
    }
    
    /// Renders a numeric code as a zero-padded decimal string
    pub fn format_code(code: u32) -> String {
        format!("{:0width$}", code, width = CODE_LENGTH)
    }
    
    /// Checks if the code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
    
    /// Seconds until expiry, zero once expired
    pub fn expires_in_seconds(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds().max(0)
    }
}
