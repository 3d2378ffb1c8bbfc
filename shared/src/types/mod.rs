//! Type definitions shared by the HTTP surface
//!
//! - `response` - API response wrapper and health status

pub mod response;

pub use response::{ApiResponse, HealthStatus};
