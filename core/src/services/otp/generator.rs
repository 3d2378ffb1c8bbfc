//! Numeric code generation

use rand::Rng;

/// Smallest code produced by `RandomOtpGenerator`
pub const MIN_CODE: u32 = 100_000;

/// Largest code produced by `RandomOtpGenerator`
pub const MAX_CODE: u32 = 999_999;

/// Source of numeric one-time codes
pub trait OtpGenerator: Send + Sync {
    /// Produce the next code
    fn generate(&self) -> u32;
}

/// Uniform random 6-digit codes from the thread-local RNG
///
/// The lower bound keeps every code at exactly six significant digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOtpGenerator;

impl RandomOtpGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl OtpGenerator for RandomOtpGenerator {
    fn generate(&self) -> u32 {
        rand::thread_rng().gen_range(MIN_CODE..=MAX_CODE)
    }
}
