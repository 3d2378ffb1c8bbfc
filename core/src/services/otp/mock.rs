//! Deterministic generators for tests

use std::sync::atomic::{AtomicU32, Ordering};

use super::generator::OtpGenerator;

/// Always returns the same code
#[derive(Debug, Clone, Copy)]
pub struct FixedOtpGenerator {
    code: u32,
}

impl FixedOtpGenerator {
    pub fn new(code: u32) -> Self {
        Self { code }
    }
}

impl OtpGenerator for FixedOtpGenerator {
    fn generate(&self) -> u32 {
        self.code
    }
}

/// Returns `start`, `start + 1`, `start + 2`, ...
#[derive(Debug)]
pub struct SequentialOtpGenerator {
    next: AtomicU32,
}

impl SequentialOtpGenerator {
    pub fn new(start: u32) -> Self {
        Self {
            next: AtomicU32::new(start),
        }
    }
}

impl OtpGenerator for SequentialOtpGenerator {
    fn generate(&self) -> u32 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}
