//! Cache fault taxonomy
//! 
//! Every variant wraps whatever the underlying store client reported, so the
//! original cause stays reachable through `std::error::Error::source`.

use thiserror::Error;

/// Boxed cause carried by cache errors
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by an `OtpCacheRepository`
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Error while saving to cache")]
    Write(#[source] BoxError),

    #[error("Error while retrieving from the cache")]
    Read(#[source] BoxError),

    #[error("Error while removing from the cache")]
    Delete(#[source] BoxError),

    #[error("Error while pinging the cache")]
    Ping(#[source] BoxError),
}

impl CacheError {
    /// Wrap a write fault
    pub fn write(cause: impl Into<BoxError>) -> Self {
        CacheError::Write(cause.into())
    }

    /// Wrap a read fault
    pub fn read(cause: impl Into<BoxError>) -> Self {
        CacheError::Read(cause.into())
    }

    /// Wrap a delete fault
    pub fn delete(cause: impl Into<BoxError>) -> Self {
        CacheError::Delete(cause.into())
    }

    /// Wrap a ping fault
    pub fn ping(cause: impl Into<BoxError>) -> Self {
        CacheError::Ping(cause.into())
    }

    /// Stable name of the failed operation, used as a log field
    pub fn operation(&self) -> &'static str {
        match self {
            CacheError::Write(_) => "write",
            CacheError::Read(_) => "read",
            CacheError::Delete(_) => "delete",
            CacheError::Ping(_) => "ping",
        }
    }

    /// The wrapped cause
    pub fn cause(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        match self {
            CacheError::Write(e)
            | CacheError::Read(e)
            | CacheError::Delete(e)
            | CacheError::Ping(e) => e.as_ref(),
        }
    }

    /// Message followed by the cause, for logs and health details
    pub fn detailed_message(&self) -> String {
        format!("{}: {}", self, self.cause())
    }
}
